//! In-memory sheet source
//!
//! Serves canned responses for both channels and counts requests. Used by
//! tests and by hosts that obtain the data some other way (for example a
//! browser that fetched it on the JS side).

use std::sync::atomic::{AtomicUsize, Ordering};

use super::SheetSource;
use crate::utils::error::FetchError;

/// Canned answer for one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryResponse {
    /// Successful body, returned verbatim
    Body(String),
    /// Structured payload; wrapped in the requested callback on the way out
    Payload(String),
    /// Non-success HTTP status
    Status(u16),
    /// Transport failure
    Unreachable,
}

impl MemoryResponse {
    fn answer(&self, callback: Option<&str>) -> Result<String, FetchError> {
        match self {
            MemoryResponse::Body(body) => Ok(body.clone()),
            MemoryResponse::Payload(json) => match callback {
                Some(name) => Ok(format!("/*O_o*/\n{}({});", name, json)),
                None => Ok(json.clone()),
            },
            MemoryResponse::Status(code) => Err(FetchError::Status(*code)),
            MemoryResponse::Unreachable => {
                Err(FetchError::Transport("source unreachable".to_string()))
            }
        }
    }
}

/// Source answering from memory
#[derive(Debug)]
pub struct MemorySource {
    delimited: MemoryResponse,
    structured: MemoryResponse,
    delimited_requests: AtomicUsize,
    structured_requests: AtomicUsize,
}

impl MemorySource {
    pub fn new(delimited: MemoryResponse, structured: MemoryResponse) -> Self {
        Self {
            delimited,
            structured,
            delimited_requests: AtomicUsize::new(0),
            structured_requests: AtomicUsize::new(0),
        }
    }

    /// Primary channel serves `csv`; fallback is unreachable
    pub fn csv(csv: impl Into<String>) -> Self {
        Self::new(MemoryResponse::Body(csv.into()), MemoryResponse::Unreachable)
    }

    /// Primary channel fails; fallback serves `json`
    pub fn gviz(json: impl Into<String>) -> Self {
        Self::new(MemoryResponse::Status(404), MemoryResponse::Payload(json.into()))
    }

    /// Both channels fail
    pub fn unreachable() -> Self {
        Self::new(MemoryResponse::Unreachable, MemoryResponse::Unreachable)
    }

    pub fn delimited_requests(&self) -> usize {
        self.delimited_requests.load(Ordering::Relaxed)
    }

    pub fn structured_requests(&self) -> usize {
        self.structured_requests.load(Ordering::Relaxed)
    }
}

impl SheetSource for MemorySource {
    fn fetch_delimited(&self) -> Result<String, FetchError> {
        self.delimited_requests.fetch_add(1, Ordering::Relaxed);
        self.delimited.answer(None)
    }

    fn fetch_structured(&self, callback: &str) -> Result<String, FetchError> {
        self.structured_requests.fetch_add(1, Ordering::Relaxed);
        self.structured.answer(Some(callback))
    }
}
