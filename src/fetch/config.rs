//! Retrieval configuration

use crate::data::constants::{
    CSV_EXPORT_PATH, DEFAULT_SPREADSHEET_ID, GVIZ_QUERY_PATH, SPREADSHEET_BASE_URL,
};

/// Where a sheet is fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// Spreadsheet identifier
    pub spreadsheet_id: String,
    /// Base URL the identifier is appended to
    pub base_url: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            base_url: SPREADSHEET_BASE_URL.to_string(),
        }
    }
}

impl SheetConfig {
    /// Default endpoints for another spreadsheet
    pub fn for_sheet(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            ..Default::default()
        }
    }

    fn sheet_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.spreadsheet_id
        )
    }

    /// Delimited-text export URL
    pub fn csv_url(&self) -> String {
        format!("{}/{}", self.sheet_url(), CSV_EXPORT_PATH)
    }

    /// Structured query URL answering through `callback`
    pub fn gviz_url(&self, callback: &str) -> String {
        format!(
            "{}/{};responseHandler:{}",
            self.sheet_url(),
            GVIZ_QUERY_PATH,
            callback
        )
    }
}
