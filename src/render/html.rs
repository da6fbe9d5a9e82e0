//! HTML serialization of pages

use std::fmt::Write;

use super::{Column, PageContent, PresentationMode};
use crate::data::constants::{ERROR_CAUSES, ERROR_HEADLINE, ERROR_RELOAD_LABEL};
use crate::data::stylesheet::STYLESHEET;
use crate::utils::html::escape;

const TOGGLE_SCRIPT: &str = "document.getElementById('theme-toggle').addEventListener('click', function () { document.body.classList.toggle('light-theme'); });";

/// Terminal Error panel markup
pub fn error_panel() -> String {
    let mut out = String::from("<div class=\"error\">");
    let _ = write!(out, "<p>{}</p><ol>", escape(ERROR_HEADLINE));
    for cause in ERROR_CAUSES {
        let _ = write!(out, "<li>{}</li>", escape(cause));
    }
    let _ = write!(
        out,
        "</ol><button onclick=\"location.reload()\">{}</button></div>",
        escape(ERROR_RELOAD_LABEL)
    );
    out
}

/// Markup of one column container
pub fn column(column: &Column) -> String {
    let mut out = String::from("<div class=\"column\">");
    for fragment in column.fragments() {
        out.push_str(&fragment.to_html());
    }
    out.push_str("</div>");
    out
}

/// Markup of the `#content-container` region
pub fn content_region(content: &PageContent) -> String {
    let mut out = String::from("<div id=\"content-container\">");
    match content {
        PageContent::Empty => {}
        PageContent::Columns(columns) => {
            for col in columns {
                out.push_str(&column(col));
            }
        }
        PageContent::Error => out.push_str(&error_panel()),
    }
    out.push_str("</div>");
    out
}

/// Full HTML5 document around the content region
pub fn document(title: &str, mode: PresentationMode, content: &PageContent) -> String {
    let mut out = String::with_capacity(STYLESHEET.len() + 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    let _ = writeln!(out, "<style>{}</style>", STYLESHEET);
    out.push_str("</head>\n");
    match mode.body_class() {
        Some(class) => {
            let _ = writeln!(out, "<body class=\"{}\">", class);
        }
        None => out.push_str("<body>\n"),
    }
    out.push_str("<button id=\"theme-toggle\" type=\"button\">Toggle theme</button>\n");
    out.push_str(&content_region(content));
    out.push('\n');
    let _ = writeln!(out, "<script>{}</script>", TOGGLE_SCRIPT);
    out.push_str("</body>\n</html>\n");
    out
}
