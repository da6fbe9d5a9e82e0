//! Media link detection
//!
//! Cells that point at a video or an image are rendered as embeds instead of
//! text. Detection runs on the transformed cell text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::constants::{IMAGE_EXTENSIONS, VIDEO_DOMAINS, VIDEO_ID_LEN};

lazy_static! {
    // Greedy prefix: the last recognised marker on the first line wins.
    static ref VIDEO_ID: Regex = Regex::new(
        r"^.*(youtu.be/|v/|u/[0-9A-Za-z_]/|embed/|watch\?v=|&v=)([^#&?]*).*"
    ).unwrap();
}

/// Whether the text mentions a supported video host
pub fn mentions_video(text: &str) -> bool {
    VIDEO_DOMAINS.iter().any(|domain| text.contains(domain))
}

/// Extract an 11-character video identifier
///
/// ```rust
/// use sheetcols::core::format::media::extract_video_id;
///
/// assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
/// assert_eq!(extract_video_id("https://youtu.be/short"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<&str> {
    let caps = VIDEO_ID.captures(url)?;
    let id = caps.get(2)?.as_str();
    if id.chars().count() == VIDEO_ID_LEN {
        Some(id)
    } else {
        None
    }
}

/// Whether the text ends in a recognised image extension (case-insensitive)
pub fn is_image_url(text: &str) -> bool {
    match text.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
