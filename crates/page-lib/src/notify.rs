// crates/page-lib/src/notify.rs

//! Notification port used for blocking user-facing messages.
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

/// Shows a message to the user and returns once it has been acknowledged
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Records every message, in order
#[derive(Debug, Default)]
pub struct CapturingNotifier {
    messages: Mutex<Vec<String>>,
}

impl CapturingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Drain the recorded messages
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl Notifier for CapturingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Headless notifier that reports messages through the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(target: "ecotrack_page::notify", "{message}");
    }
}

/// Delivers each message to every sink, in order
#[derive(Clone, Default)]
pub struct FanOutNotifier {
    sinks: Vec<Arc<dyn Notifier>>,
}

impl FanOutNotifier {
    pub fn new(sinks: Vec<Arc<dyn Notifier>>) -> Self {
        Self { sinks }
    }
}

impl Notifier for FanOutNotifier {
    fn notify(&self, message: &str) {
        for sink in &self.sinks {
            sink.notify(message);
        }
    }
}
