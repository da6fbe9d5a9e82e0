//! Bionic reading emphasis
//!
//! Each word gets its leading third (rounded up) wrapped in a bold span:
//!
//! ```rust
//! use sheetcols::core::format::bionic::emphasize;
//!
//! let html = emphasize("reading");
//! assert_eq!(
//!     html,
//!     r#"<span class="bionic-word"><span class="bionic-part">rea</span>ding</span>"#
//! );
//! ```
//!
//! Text that already contains a tag is returned untouched.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

use crate::utils::html::push_escaped;

lazy_static! {
    static ref TAG_LIKE: Regex = Regex::new(r"(?i)<[a-z][\s\S]*>").unwrap();
}

/// Whether the text already contains something that looks like an HTML tag
pub fn looks_like_markup(text: &str) -> bool {
    TAG_LIKE.is_match(text)
}

/// Number of leading characters emphasized for a word of `len` characters
pub fn emphasis_len(len: usize) -> usize {
    len.div_ceil(3)
}

/// Apply bionic emphasis to plain text
pub fn emphasize(text: &str) -> Cow<'_, str> {
    if looks_like_markup(text) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() * 4);
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if word.is_empty() {
            continue;
        }
        let bold = emphasis_len(word.chars().count());
        let split = word
            .char_indices()
            .nth(bold)
            .map(|(idx, _)| idx)
            .unwrap_or(word.len());
        let (lead, rest) = word.split_at(split);

        out.push_str("<span class=\"bionic-word\"><span class=\"bionic-part\">");
        push_escaped(&mut out, lead);
        out.push_str("</span>");
        push_escaped(&mut out, rest);
        out.push_str("</span>");
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(lead: &str, rest: &str) -> String {
        format!(
            "<span class=\"bionic-word\"><span class=\"bionic-part\">{}</span>{}</span>",
            lead, rest
        )
    }

    #[test]
    fn test_emphasis_len() {
        assert_eq!(emphasis_len(1), 1);
        assert_eq!(emphasis_len(2), 1);
        assert_eq!(emphasis_len(3), 1);
        assert_eq!(emphasis_len(4), 2);
        assert_eq!(emphasis_len(9), 3);
        assert_eq!(emphasis_len(10), 4);
    }

    #[test]
    fn test_emphasize_sentence() {
        let out = emphasize("ok fast reader");
        let expected = format!("{} {} {}", word("o", "k"), word("fa", "st"), word("re", "ader"));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_double_spaces_preserved() {
        let out = emphasize("a  b");
        assert_eq!(out, format!("{}  {}", word("a", ""), word("b", "")));
    }

    #[test]
    fn test_markup_is_noop() {
        let input = "<b>already</b> formatted";
        assert!(matches!(emphasize(input), Cow::Borrowed(s) if s == input));

        let upper = "<DIV>x</DIV>";
        assert_eq!(emphasize(upper), upper);
    }

    #[test]
    fn test_lone_angle_is_not_markup() {
        assert!(!looks_like_markup("a < b"));
        assert!(!looks_like_markup("<1>"));
        assert!(looks_like_markup("<a\nb>"));
        assert_eq!(emphasize("a<b"), word("a", "&lt;b"));
    }

    #[test]
    fn test_multibyte_words() {
        assert_eq!(emphasize("über"), word("üb", "er"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(emphasize(""), "");
    }
}
