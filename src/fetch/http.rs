//! HTTP sheet source
//!
//! Blocking GETs against the export and query endpoints. No timeout is set
//! beyond the client default and nothing is retried.

use reqwest::blocking::Client;
use tracing::debug;

use super::{SheetConfig, SheetSource};
use crate::utils::error::FetchError;

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

/// Source backed by the published spreadsheet endpoints
#[derive(Debug, Clone)]
pub struct HttpSource {
    config: SheetConfig,
    client: Client,
}

impl HttpSource {
    pub fn new(config: SheetConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("sheetcols/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "GET");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

impl SheetSource for HttpSource {
    fn fetch_delimited(&self) -> Result<String, FetchError> {
        self.get_text(&self.config.csv_url())
    }

    fn fetch_structured(&self, callback: &str) -> Result<String, FetchError> {
        self.get_text(&self.config.gviz_url(callback))
    }
}
