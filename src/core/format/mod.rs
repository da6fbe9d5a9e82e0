//! Cell text formatter
//!
//! Turns the raw text of one cell into a [`Fragment`]. The pipeline is:
//!
//! 1. Parse into typed spans (headings, quotes, superscripts, plain text)
//! 2. Detect media on the transformed text; a video link or an image URL
//!    replaces all text formatting
//! 3. Otherwise split into non-blank lines: several lines become paragraphs,
//!    a single line stays one block
//!
//! Residual plain text gets bionic emphasis when rendered. Formatting never
//! fails: anything that does not match a rule stays literal text.
//!
//! ```rust
//! use sheetcols::core::format::{format_cell, FragmentKind};
//!
//! assert_eq!(format_cell("https://youtu.be/dQw4w9WgXcQ").kind(), FragmentKind::Embed);
//! assert_eq!(format_cell("https://example.com/cat.png").kind(), FragmentKind::Image);
//! assert_eq!(format_cell("[Title]").kind(), FragmentKind::Text);
//! assert_eq!(format_cell("one\ntwo").kind(), FragmentKind::Paragraphs);
//! ```

pub mod bionic;
pub mod heading;
pub mod media;
pub mod spans;

pub use bionic::emphasize;
pub use heading::{format_heading, LetterClass};
pub use media::{extract_video_id, is_image_url};
pub use spans::{parse_spans, Span};

use crate::data::constants::VIDEO_EMBED_BASE;
use crate::utils::html::escape;

/// Rendered unit for one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A single text block
    Text(Vec<Span>),
    /// One paragraph per non-blank line
    Paragraphs(Vec<Vec<Span>>),
    /// Image reference
    Image { src: String },
    /// Video embed
    Embed { video_id: String },
}

/// Discriminant of a [`Fragment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Text,
    Paragraphs,
    Image,
    Embed,
}

impl Fragment {
    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::Text(_) => FragmentKind::Text,
            Fragment::Paragraphs(_) => FragmentKind::Paragraphs,
            Fragment::Image { .. } => FragmentKind::Image,
            Fragment::Embed { .. } => FragmentKind::Embed,
        }
    }

    /// All spans of the fragment in order, empty for media
    pub fn spans(&self) -> Vec<&Span> {
        match self {
            Fragment::Text(spans) => spans.iter().collect(),
            Fragment::Paragraphs(lines) => lines.iter().flatten().collect(),
            Fragment::Image { .. } | Fragment::Embed { .. } => Vec::new(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Fragment::Text(spans) => format!("<div>{}</div>", spans::spans_to_html(spans)),
            Fragment::Paragraphs(lines) => {
                let mut out = String::from("<div>");
                for line in lines {
                    out.push_str("<p>");
                    out.push_str(&spans::spans_to_html(line));
                    out.push_str("</p>");
                }
                out.push_str("</div>");
                out
            }
            Fragment::Image { src } => format!("<img src=\"{}\" alt=\"\">", escape(src)),
            Fragment::Embed { video_id } => format!(
                "<div class=\"youtube-embed\"><iframe src=\"{}{}\" frameborder=\"0\" allowfullscreen></iframe></div>",
                VIDEO_EMBED_BASE,
                escape(video_id)
            ),
        }
    }
}

/// Format the raw text of one cell
pub fn format_cell(raw: &str) -> Fragment {
    let spans = parse_spans(raw);
    let transformed = spans::transformed_text(&spans);

    if media::mentions_video(&transformed) {
        if let Some(id) = extract_video_id(&transformed) {
            return Fragment::Embed {
                video_id: id.to_string(),
            };
        }
    }

    if is_image_url(&transformed) {
        return Fragment::Image { src: transformed };
    }

    let lines = spans::split_lines(&spans);
    if lines.len() > 1 {
        Fragment::Paragraphs(lines)
    } else {
        Fragment::Text(spans)
    }
}

/// Format a cell and render it straight to HTML
pub fn format_cell_html(raw: &str) -> String {
    format_cell(raw).to_html()
}
