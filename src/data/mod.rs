//! Data layer - Static literals and the page stylesheet
//!
//! This module contains all static data used while loading and rendering:
//! - Endpoint and identifier constants
//! - Character and extension sets for the formatter
//! - The embedded stylesheet for column pages

pub mod constants;
pub mod stylesheet;

// Re-export commonly used items
pub use constants::{
    DEFAULT_SPREADSHEET_ID, ERROR_CAUSES, ERROR_HEADLINE, ERROR_RELOAD_LABEL, IMAGE_EXTENSIONS,
    VOWELS,
};
pub use stylesheet::STYLESHEET;
