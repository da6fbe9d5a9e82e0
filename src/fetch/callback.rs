//! One-shot callback channel for the structured fallback
//!
//! Each fallback attempt registers a uniquely named callback and gets back a
//! [`PendingCallback`] guard. The response body is dispatched to the registry,
//! which unwraps `name(payload);`, hands the payload to the matching guard
//! over a single-slot channel and forgets the name. Dropping the guard also
//! forgets it, so nothing outlives the attempt on any path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::core::table::unwrap_callback;
use crate::data::constants::CALLBACK_PREFIX;
use crate::utils::error::FetchError;

/// Live callback registrations
#[derive(Debug, Default)]
pub struct CallbackRegistry {
    pending: Mutex<HashMap<String, SyncSender<String>>>,
    sequence: AtomicU64,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SyncSender<String>>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register a fresh callback name for one attempt
    pub fn register(&self) -> PendingCallback<'_> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let name = format!(
            "{}{}_{}",
            CALLBACK_PREFIX,
            chrono::Utc::now().timestamp_millis(),
            seq
        );
        let (sender, receiver) = mpsc::sync_channel(1);
        self.lock().insert(name.clone(), sender);
        debug!(callback = %name, "registered callback");

        PendingCallback {
            name,
            receiver,
            registry: self,
        }
    }

    /// Deliver a callback-wrapped body to its registration
    ///
    /// The registration is removed whether or not delivery succeeds.
    pub fn dispatch(&self, body: &str) -> Result<(), FetchError> {
        let (name, payload) = unwrap_callback(body).ok_or_else(|| {
            let preview: String = body.chars().take(64).collect();
            FetchError::MalformedBody(preview)
        })?;

        let sender = self
            .lock()
            .remove(name)
            .ok_or_else(|| FetchError::UnknownCallback(name.to_string()))?;

        debug!(callback = %name, bytes = payload.len(), "callback invoked");
        // The receiver lives in the guard; a full or closed slot means it was already resolved.
        let _ = sender.try_send(payload.to_string());
        Ok(())
    }

    /// Number of registrations not yet invoked or dropped
    pub fn pending_count(&self) -> usize {
        self.lock().len()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    fn forget(&self, name: &str) {
        if self.lock().remove(name).is_some() {
            debug!(callback = %name, "callback dropped without invocation");
        }
    }
}

/// Guard for one registered callback
#[derive(Debug)]
pub struct PendingCallback<'a> {
    name: String,
    receiver: Receiver<String>,
    registry: &'a CallbackRegistry,
}

impl PendingCallback<'_> {
    /// Unique callback name to send with the request
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Take the delivered payload, consuming the guard
    pub fn receive(self) -> Result<String, FetchError> {
        match self.receiver.try_recv() {
            Ok(payload) => Ok(payload),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {
                Err(FetchError::NotInvoked(self.name.clone()))
            }
        }
    }
}

impl Drop for PendingCallback<'_> {
    fn drop(&mut self) {
        self.registry.forget(&self.name);
    }
}
