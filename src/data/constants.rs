//! Constants for retrieval, classification and the error panel
//!
//! This module contains the fixed literals the rest of the crate is built on:
//! - The spreadsheet identifier and the Google export endpoints
//! - Character and extension sets used by the formatter
//! - The copy shown on the Terminal Error panel

use phf::phf_set;

// ============================================================================
// Retrieval
// ============================================================================

/// Identifier of the published spreadsheet rendered by default
pub const DEFAULT_SPREADSHEET_ID: &str = "1qPu8Ht3rHZmZ7Vr0ajiPqZhhm21cCwkvAB9wuPOqiEY";

/// Base URL for spreadsheet documents; the identifier follows it
pub const SPREADSHEET_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Path suffix of the delimited-text export
pub const CSV_EXPORT_PATH: &str = "export?format=csv";

/// Path suffix of the structured query endpoint
pub const GVIZ_QUERY_PATH: &str = "gviz/tq?tqx=out:json";

/// Prefix of every one-shot callback name
pub const CALLBACK_PREFIX: &str = "jsonpCallback_";

// ============================================================================
// Formatter
// ============================================================================

/// Vowels for heading classification (case-insensitive via both cases)
pub static VOWELS: phf::Set<char> = phf_set! {
    'A', 'E', 'I', 'O', 'U', 'a', 'e', 'i', 'o', 'u',
};

/// File extensions that turn a cell into an image reference
pub static IMAGE_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "jpeg", "jpg", "gif", "png",
};

/// Domain substrings that mark a cell as a video link
pub const VIDEO_DOMAINS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Length of a valid video identifier
pub const VIDEO_ID_LEN: usize = 11;

/// Embed endpoint for video identifiers
pub const VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";

// ============================================================================
// Terminal Error panel
// ============================================================================

/// Lead sentence of the Terminal Error panel
pub const ERROR_HEADLINE: &str = "Failed to load data. Please ensure:";

/// Numbered causes listed on the Terminal Error panel
pub const ERROR_CAUSES: [&str; 3] = [
    "Your Google Sheet is published (File > Share > Publish to web)",
    "You're viewing this page through a web server (not as file://)",
    "You have an active internet connection",
];

/// Label of the reload action
pub const ERROR_RELOAD_LABEL: &str = "Try Again";
