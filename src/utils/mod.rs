//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - HTML escaping

pub mod error;
pub mod html;

// Re-export commonly used items
pub use error::{FetchError, RetrievalError, SheetError, SheetResult};
pub use html::escape;
