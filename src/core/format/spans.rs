//! Typed span representation of cell text
//!
//! Cell text is parsed in small steps. Every step only looks at the
//! [`Span::Plain`] pieces left by the previous one, so markup produced by an
//! earlier step is never matched again:
//!
//! 1. `[X]` becomes [`Span::Heading1`]
//! 2. `<X>` becomes [`Span::Heading2`]
//! 3. `"X"` becomes [`Span::Quote`]
//! 4. `- X` becomes [`Span::Superscript`]

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::bionic::emphasize;
use super::heading::format_heading;

lazy_static! {
    static ref BRACKET_HEADING: Regex = Regex::new(r"\[(.*?)\]").unwrap();
    static ref ANGLE_HEADING: Regex = Regex::new(r"<(.*?)>").unwrap();
    static ref QUOTED: Regex = Regex::new(r#""(.*?)""#).unwrap();
    static ref DASH_TOKEN: Regex = Regex::new(r"-\s(.*?)(\s|$)").unwrap();
}

/// A piece of cell text with its formatting role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// `[X]`, rendered as `<h1>`
    Heading1(String),
    /// `<X>`, rendered as `<h2>`
    Heading2(String),
    /// `"X"`, rendered as a quote block
    Quote(String),
    /// `- X`, rendered as `<sup>`
    Superscript(String),
    /// Residual text
    Plain(String),
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    /// Inner text without any markup
    pub fn text(&self) -> &str {
        match self {
            Span::Heading1(t)
            | Span::Heading2(t)
            | Span::Quote(t)
            | Span::Superscript(t)
            | Span::Plain(t) => t,
        }
    }

    /// Render the span, applying bionic emphasis to residual text
    pub fn write_html(&self, out: &mut String) {
        match self {
            Span::Plain(text) => out.push_str(&emphasize(text)),
            other => other.write_markup(out),
        }
    }

    /// Render the span with residual text left as-is
    ///
    /// This is the text media detection sees.
    pub fn write_markup(&self, out: &mut String) {
        match self {
            Span::Heading1(text) => {
                out.push_str("<h1>");
                out.push_str(&format_heading(text));
                out.push_str("</h1>");
            }
            Span::Heading2(text) => {
                out.push_str("<h2>");
                out.push_str(&format_heading(text));
                out.push_str("</h2>");
            }
            Span::Quote(text) => {
                out.push_str("<div class=\"quote\">");
                out.push_str(&emphasize(text));
                out.push_str("</div>");
            }
            Span::Superscript(text) => {
                out.push_str("<sup>");
                out.push_str(&emphasize(text));
                out.push_str("</sup>");
            }
            Span::Plain(text) => out.push_str(text),
        }
    }
}

/// Parse cell text into spans
pub fn parse_spans(text: &str) -> Vec<Span> {
    let spans = vec![Span::plain(text)];
    let spans = split_plain(spans, &BRACKET_HEADING, |caps| {
        vec![Span::Heading1(caps[1].to_string())]
    });
    let spans = split_plain(spans, &ANGLE_HEADING, |caps| {
        vec![Span::Heading2(caps[1].to_string())]
    });
    let spans = split_plain(spans, &QUOTED, |caps| vec![Span::Quote(caps[1].to_string())]);
    let spans = split_plain(spans, &DASH_TOKEN, |caps| {
        vec![
            Span::Superscript(caps[1].to_string()),
            Span::plain(&caps[2]),
        ]
    });
    coalesce(spans)
}

/// Replace every match of `pattern` inside plain spans
fn split_plain<F>(spans: Vec<Span>, pattern: &Regex, make: F) -> Vec<Span>
where
    F: Fn(&Captures) -> Vec<Span>,
{
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            Span::Plain(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            if whole.start() > last {
                result.push(Span::plain(&text[last..whole.start()]));
            }
            result.extend(make(&caps));
            last = whole.end();
        }
        if last < text.len() {
            result.push(Span::plain(&text[last..]));
        }
    }
    result
}

/// Merge adjacent plain spans and drop empty ones
fn coalesce(spans: Vec<Span>) -> Vec<Span> {
    let mut result: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            Span::Plain(text) if text.is_empty() => {}
            Span::Plain(text) => match result.last_mut() {
                Some(Span::Plain(prev)) => prev.push_str(&text),
                _ => result.push(Span::Plain(text)),
            },
            other => result.push(other),
        }
    }
    result
}

/// Split spans into lines at newlines inside plain text, dropping blank lines
pub fn split_lines(spans: &[Span]) -> Vec<Vec<Span>> {
    let mut lines: Vec<Vec<Span>> = vec![Vec::new()];
    for span in spans {
        match span {
            Span::Plain(text) => {
                for (i, piece) in text.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Vec::new());
                    }
                    if !piece.is_empty() {
                        if let Some(line) = lines.last_mut() {
                            line.push(Span::plain(piece));
                        }
                    }
                }
            }
            other => {
                if let Some(line) = lines.last_mut() {
                    line.push(other.clone());
                }
            }
        }
    }
    lines.retain(|line| !is_blank_line(line));
    lines
}

fn is_blank_line(line: &[Span]) -> bool {
    line.iter()
        .all(|span| matches!(span, Span::Plain(text) if text.trim().is_empty()))
}

/// Serialize spans the way media detection sees them
pub fn transformed_text(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        span.write_markup(&mut out);
    }
    out
}

/// Render spans to HTML
pub fn spans_to_html(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        span.write_html(&mut out);
    }
    out
}
