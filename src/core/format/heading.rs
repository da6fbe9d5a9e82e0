//! Per-letter heading decoration
//!
//! Every ASCII letter of a heading is wrapped in a `vowel` or `consonant` span
//! so the stylesheet can color them. Anything else passes through unchanged.

use crate::data::constants::VOWELS;
use crate::utils::html::push_escaped_char;

/// Classification of a heading character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

impl LetterClass {
    /// CSS class used for this classification
    pub fn css_class(&self) -> &'static str {
        match self {
            LetterClass::Vowel => "vowel",
            LetterClass::Consonant => "consonant",
        }
    }
}

/// Classify a character, `None` for non-letters
pub fn classify(ch: char) -> Option<LetterClass> {
    if VOWELS.contains(&ch) {
        Some(LetterClass::Vowel)
    } else if ch.is_ascii_alphabetic() {
        Some(LetterClass::Consonant)
    } else {
        None
    }
}

/// Render heading text with per-letter classification spans
pub fn format_heading(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 8);
    for ch in text.chars() {
        match classify(ch) {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class.css_class());
                out.push_str("\">");
                out.push(ch);
                out.push_str("</span>");
            }
            None => push_escaped_char(&mut out, ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify() {
        assert_eq!(classify('a'), Some(LetterClass::Vowel));
        assert_eq!(classify('U'), Some(LetterClass::Vowel));
        assert_eq!(classify('y'), Some(LetterClass::Consonant));
        assert_eq!(classify('Z'), Some(LetterClass::Consonant));
        assert_eq!(classify('3'), None);
        assert_eq!(classify(' '), None);
        assert_eq!(classify('é'), None);
    }

    #[test]
    fn test_format_heading() {
        assert_eq!(
            format_heading("Hi!"),
            "<span class=\"consonant\">H</span><span class=\"vowel\">i</span>!"
        );
    }

    #[test]
    fn test_every_letter_classified_once() {
        let out = format_heading("Title 2");
        let vowels = out.matches("class=\"vowel\"").count();
        let consonants = out.matches("class=\"consonant\"").count();
        assert_eq!(vowels, 2);
        assert_eq!(consonants, 3);
        assert!(out.ends_with("</span> 2"));
    }

    #[test]
    fn test_non_letters_are_escaped_not_wrapped() {
        assert_eq!(format_heading("&"), "&amp;");
    }
}
