//! # sheetcols
//!
//! Render a published spreadsheet as a column-based page.
//!
//! ## Features
//!
//! - **Two source shapes**: CSV export with a structured (gviz JSON) fallback
//! - **One-shot fallback channel**: uniquely named callbacks, cleaned up on every path
//! - **Text formatting**: `[H1]`, `<H2>`, `"quotes"`, `- superscripts`
//! - **Bionic reading**: the leading third of every word is emphasized
//! - **Media**: video links become embeds, image URLs become images
//! - **Light/dark presentation** with a client-side toggle
//! - **WASM Support**: the formatter and renderers compile to WebAssembly
//!
//! ## Usage Examples
//!
//! ### Formatting One Cell
//!
//! ```rust
//! use sheetcols::format_cell_html;
//!
//! let html = format_cell_html("[Hi]");
//! assert!(html.contains("<h1>"));
//! assert!(html.contains("class=\"vowel\""));
//! ```
//!
//! ### Rendering a Table
//!
//! ```rust
//! use sheetcols::{render_csv, RenderOptions};
//!
//! let html = render_csv("a,b\n[Hi],\"ok\"", &RenderOptions::fragment());
//! assert_eq!(html.matches("class=\"column\"").count(), 2);
//! assert!(html.contains("class=\"quote\""));
//! ```
//!
//! ### Loading With Fallback
//!
//! ```rust
//! use sheetcols::fetch::{Loader, MemorySource};
//! use sheetcols::render::{Page, RenderOptions};
//!
//! let loader = Loader::new(MemorySource::unreachable());
//! let mut page = Page::new(RenderOptions::default());
//! let outcome = loader.load(&mut page);
//! assert!(!outcome.is_success());
//! assert_eq!(page.error_displays(), 2);
//! ```

/// Pure formatting and normalization
pub mod core;

/// Static literals and the stylesheet
pub mod data;

/// Retrieval with fallback
pub mod fetch;

/// Page layout and HTML output
pub mod render;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core functions
pub use core::format::{
    emphasize, extract_video_id, format_cell, format_cell_html, format_heading, is_image_url,
    Fragment, FragmentKind, Span,
};
pub use core::table::{detect_shape, GvizResponse, SourceShape, Table};

// Re-export orchestration and rendering
pub use data::constants::DEFAULT_SPREADSHEET_ID;
pub use fetch::{load, LoadOutcome, Loader, MemorySource, SheetConfig, SheetSource};
pub use render::{Page, PresentationMode, RenderOptions, Surface};

#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
pub use fetch::HttpSource;

// Re-export utilities
pub use utils::error::{FetchError, RetrievalError, SheetError, SheetResult};

/// Render a table onto a fresh page
pub fn render_table(table: &Table, options: &RenderOptions) -> String {
    let mut page = Page::new(options.clone());
    page.populate(table);
    page.to_html()
}

/// Render CSV export text
pub fn render_csv(csv: &str, options: &RenderOptions) -> String {
    render_table(&Table::from_delimited(csv), options)
}

/// Render a structured payload, bare or callback-wrapped
pub fn render_structured(body: &str, options: &RenderOptions) -> SheetResult<String> {
    let payload = core::table::unwrap_callback(body)
        .map(|(_, payload)| payload)
        .unwrap_or(body);
    let table = Table::from_gviz_json(payload)?;
    Ok(render_table(&table, options))
}

/// Render a body of either shape, detecting which one it is
pub fn render_body(body: &str, options: &RenderOptions) -> SheetResult<String> {
    let table = Table::from_any(body)?;
    Ok(render_table(&table, options))
}

/// Render the Terminal Error page
pub fn render_error(options: &RenderOptions) -> String {
    let mut page = Page::new(options.clone());
    page.show_error();
    page.to_html()
}
