//! WASM bindings for sheetcols
//!
//! This module provides JavaScript-accessible functions for formatting cells
//! and rendering sheets that the host page has already fetched.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::render::RenderOptions;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Format one cell's text to HTML
///
/// # Arguments
/// * `text` - Raw cell text
///
/// # Returns
/// HTML for the cell's fragment
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatCell")]
pub fn format_cell_wasm(text: &str) -> String {
    crate::format_cell_html(text)
}

/// Apply bionic emphasis to plain text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "bionic")]
pub fn bionic_wasm(text: &str) -> String {
    crate::emphasize(text).into_owned()
}

/// Extract an 11-character video identifier, if any
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "extractVideoId")]
pub fn extract_video_id_wasm(url: &str) -> Option<String> {
    crate::extract_video_id(url).map(str::to_string)
}

/// Render CSV export text to the content region
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderCsv")]
pub fn render_csv_wasm(csv: &str) -> String {
    crate::render_csv(csv, &RenderOptions::fragment())
}

/// Render a structured payload to the content region
///
/// Falls back to the error panel when the payload cannot be decoded.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderGviz")]
pub fn render_gviz_wasm(body: &str) -> String {
    let options = RenderOptions::fragment();
    crate::render_structured(body, &options).unwrap_or_else(|_| crate::render_error(&options))
}

/// Render a body of either shape with options
///
/// # Arguments
/// * `body` - CSV text or structured payload
/// * `options` - `{ mode: "light" | "dark", title: string, full_document: bool }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options_wasm(body: &str, options: JsValue) -> String {
    let opts: RenderOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    crate::render_body(body, &opts).unwrap_or_else(|_| crate::render_error(&opts))
}

/// Terminal Error panel markup
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "errorPanel")]
pub fn error_panel_wasm() -> String {
    crate::render::html::error_panel()
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
