// ============================
// crates/page-lib/src/alerts.rs
// ============================
//! Auto-dismissal of flash banners.
//!
//! Once the document is ready a one-shot timer is armed. When it elapses
//! every element carrying the `alert` class is hidden with `display: none`.
//! The banners stay in the document.
use std::sync::Arc;
use std::time::Duration;

use ecotrack_common::{Display, ALERT_CLASS, ALERT_DISMISS_DELAY_MS};
use metrics::counter;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::dom::Document;
use crate::error::PageError;
use crate::lifecycle::ReadySignal;
use crate::metrics::{ALERTS_HIDDEN, ALERTS_SCHEDULED};

/// Time between scheduling and hiding the banners
pub const ALERT_DISMISS_DELAY: Duration = Duration::from_millis(ALERT_DISMISS_DELAY_MS);

/// Hide every alert currently in the document.
///
/// Returns the number of matched elements. Running it again leaves the
/// same end state.
pub fn hide_alerts(document: &dyn Document) -> Result<usize, PageError> {
    let alerts = document.elements_by_class(ALERT_CLASS);
    for alert in &alerts {
        document.set_display(*alert, Display::None)?;
    }

    counter!(ALERTS_HIDDEN).increment(alerts.len() as u64);
    Ok(alerts.len())
}

/// Pending dismissal task
#[derive(Debug)]
pub struct DismissHandle {
    task: JoinHandle<usize>,
    deadline: Instant,
}

impl DismissHandle {
    /// When the banners will be hidden
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Wait for the dismissal to run and return how many banners it hid
    pub async fn finished(self) -> Result<usize, PageError> {
        Ok(self.task.await?)
    }
}

/// Hides the flash banners of one document a fixed time after it is ready
#[derive(Clone)]
pub struct AlertDismisser {
    document: Arc<dyn Document>,
    pending: Arc<Mutex<Option<DismissHandle>>>,
}

impl AlertDismisser {
    pub fn new(document: Arc<dyn Document>) -> Self {
        Self {
            document,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Arm the dismissal when `signal` fires.
    ///
    /// The callback must run inside a tokio runtime.
    pub fn install(&self, signal: &ReadySignal) -> Result<(), PageError> {
        let this = self.clone();
        signal.on_ready(move || match this.schedule() {
            Ok(handle) => *this.pending.lock() = Some(handle),
            Err(e) => error!(error = %e, "could not schedule alert dismissal"),
        })
    }

    /// Start the timer now. The deadline is fixed at the moment of the call.
    pub fn schedule(&self) -> Result<DismissHandle, PageError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| PageError::Internal(format!("No runtime for alert timer: {e}")))?;

        let deadline = Instant::now() + ALERT_DISMISS_DELAY;
        let document = self.document.clone();

        let task = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            match hide_alerts(document.as_ref()) {
                Ok(hidden) => {
                    info!(hidden, "flash alerts dismissed");
                    hidden
                },
                Err(e) => {
                    error!(error = %e, code = e.error_code(), "alert dismissal failed");
                    0
                },
            }
        });

        counter!(ALERTS_SCHEDULED).increment(1);
        debug!(delay_ms = ALERT_DISMISS_DELAY_MS, "alert dismissal scheduled");

        Ok(DismissHandle { task, deadline })
    }

    /// Take the handle armed by [`install`](Self::install), if it has run
    pub fn take_pending(&self) -> Option<DismissHandle> {
        self.pending.lock().take()
    }
}
