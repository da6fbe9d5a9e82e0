//! Core modules
//!
//! This module contains the pure, I/O-free engines:
//! - `format`: cell text to renderable fragments
//! - `table`: source shapes to a uniform table

pub mod format;
pub mod table;

// Re-export main types and functions from format
pub use format::{format_cell, format_cell_html, Fragment, FragmentKind, Span};

// Re-export main types and functions from table
pub use table::{detect_shape, GvizResponse, SourceShape, Table};
