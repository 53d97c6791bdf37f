// ============================
// crates/page-lib/src/lifecycle.rs
// ============================
//! One-shot ready signal for a page lifetime.
use parking_lot::Mutex;
use tracing::debug;

use crate::error::PageError;

type ReadyCallback = Box<dyn FnOnce() + Send>;

/// Fires once, when the initial document is available.
///
/// Callbacks run in registration order on the thread that calls [`fire`](Self::fire).
pub struct ReadySignal {
    // `None` once fired
    pending: Mutex<Option<Vec<ReadyCallback>>>,
}

impl std::fmt::Debug for ReadySignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadySignal")
            .field("fired", &self.has_fired())
            .finish()
    }
}

impl Default for ReadySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadySignal {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Some(Vec::new())),
        }
    }

    /// Register a callback for the ready signal
    pub fn on_ready<F>(&self, callback: F) -> Result<(), PageError>
    where
        F: FnOnce() + Send + 'static,
    {
        match self.pending.lock().as_mut() {
            Some(callbacks) => {
                callbacks.push(Box::new(callback));
                Ok(())
            },
            None => Err(PageError::AlreadyReady),
        }
    }

    /// Fire the signal. Returns `false` if it had already fired.
    pub fn fire(&self) -> bool {
        // Release the lock before running callbacks so they may inspect the signal
        let callbacks = self.pending.lock().take();
        let Some(callbacks) = callbacks else {
            debug!("ready signal fired twice; ignoring");
            return false;
        };

        debug!(callbacks = callbacks.len(), "document ready");
        for callback in callbacks {
            callback();
        }
        true
    }

    /// Whether the signal has fired
    pub fn has_fired(&self) -> bool {
        self.pending.lock().is_none()
    }
}
