//! Fetch orchestrator
//!
//! Loads a sheet onto a [`Surface`]:
//!
//! 1. Request the delimited export (primary)
//! 2. On failure, log it, show the Terminal Error panel and request the
//!    structured payload once through a one-shot callback (secondary)
//! 3. If that fails too, log it and show the Terminal Error panel again
//!
//! Every attempt is single-shot; there is no retry or backoff.
//!
//! ```rust
//! use sheetcols::fetch::{Loader, LoadOutcome, MemorySource};
//! use sheetcols::render::{Page, RenderOptions};
//!
//! let loader = Loader::new(MemorySource::csv("a,b\n[Hi],\"ok\""));
//! let mut page = Page::new(RenderOptions::default());
//! assert!(matches!(loader.load(&mut page), LoadOutcome::Primary));
//! assert_eq!(page.columns().len(), 2);
//! ```

pub mod callback;
pub mod config;
pub mod memory;

#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
pub mod http;

pub use callback::{CallbackRegistry, PendingCallback};
pub use config::SheetConfig;
pub use memory::{MemoryResponse, MemorySource};

#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
pub use http::HttpSource;

use tracing::{debug, error, info};

use crate::core::table::Table;
use crate::render::Surface;
use crate::utils::error::{FetchError, RetrievalError};

/// Where sheet data comes from
///
/// Implementations:
/// - `HttpSource`: the published spreadsheet endpoints (native, feature `fetch`)
/// - `MemorySource`: canned responses
pub trait SheetSource {
    /// Body of the delimited-text export
    fn fetch_delimited(&self) -> Result<String, FetchError>;

    /// Body of the structured query, wrapped in an invocation of `callback`
    fn fetch_structured(&self, callback: &str) -> Result<String, FetchError>;
}

impl<S: SheetSource + ?Sized> SheetSource for &S {
    fn fetch_delimited(&self) -> Result<String, FetchError> {
        (**self).fetch_delimited()
    }

    fn fetch_structured(&self, callback: &str) -> Result<String, FetchError> {
        (**self).fetch_structured(callback)
    }
}

/// How a load ended
#[derive(Debug)]
pub enum LoadOutcome {
    /// The delimited export succeeded
    Primary,
    /// The export failed and the structured fallback succeeded
    Fallback { primary: RetrievalError },
    /// Both channels failed; the error panel is showing
    Failed {
        primary: RetrievalError,
        secondary: RetrievalError,
    },
}

impl LoadOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, LoadOutcome::Failed { .. })
    }

    /// Errors collected along the way, primary first
    pub fn errors(&self) -> Vec<&RetrievalError> {
        match self {
            LoadOutcome::Primary => Vec::new(),
            LoadOutcome::Fallback { primary } => vec![primary],
            LoadOutcome::Failed { primary, secondary } => vec![primary, secondary],
        }
    }
}

/// Runs loads against one source
#[derive(Debug)]
pub struct Loader<S: SheetSource> {
    source: S,
    callbacks: CallbackRegistry,
}

impl<S: SheetSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            callbacks: CallbackRegistry::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    /// Retrieve and normalize the delimited export
    pub fn fetch_primary(&self) -> Result<Table, RetrievalError> {
        let body = self
            .source
            .fetch_delimited()
            .map_err(RetrievalError::Primary)?;
        debug!(bytes = body.len(), "delimited export received");
        Ok(Table::from_delimited(&body))
    }

    /// Retrieve and normalize the structured payload through a one-shot callback
    pub fn fetch_fallback(&self) -> Result<Table, RetrievalError> {
        self.fetch_structured().map_err(RetrievalError::Secondary)
    }

    fn fetch_structured(&self) -> Result<Table, FetchError> {
        let pending = self.callbacks.register();
        let body = self.source.fetch_structured(pending.name())?;
        self.callbacks.dispatch(&body)?;
        let payload = pending.receive()?;
        debug!(bytes = payload.len(), "structured payload received");
        Ok(Table::from_gviz_json(&payload)?)
    }

    /// Load onto `surface`, falling back once if the primary channel fails
    ///
    /// Reloading is calling this again; every call starts from scratch.
    pub fn load<T: Surface + ?Sized>(&self, surface: &mut T) -> LoadOutcome {
        let primary = match self.fetch_primary() {
            Ok(table) => {
                info!(columns = table.column_count(), "loaded delimited export");
                surface.populate(&table);
                return LoadOutcome::Primary;
            }
            Err(err) => {
                error!(error = %err, "Error loading data");
                surface.show_error();
                err
            }
        };

        match self.fetch_fallback() {
            Ok(table) => {
                info!(columns = table.column_count(), "loaded structured fallback");
                surface.populate(&table);
                LoadOutcome::Fallback { primary }
            }
            Err(secondary) => {
                error!(error = %secondary, "Alternative method also failed");
                surface.show_error();
                LoadOutcome::Failed { primary, secondary }
            }
        }
    }
}

/// Load once with a fresh [`Loader`]
pub fn load<S: SheetSource, T: Surface + ?Sized>(source: S, surface: &mut T) -> LoadOutcome {
    Loader::new(source).load(surface)
}
