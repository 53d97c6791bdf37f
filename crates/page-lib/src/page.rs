// ============================
// crates/page-lib/src/page.rs
// ============================
//! Wiring for a single page lifetime.
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::alerts::{AlertDismisser, DismissHandle};
use crate::dom::Document;
use crate::error::PageError;
use crate::guard::PasswordGuard;
use crate::lifecycle::ReadySignal;
use crate::notify::Notifier;

/// What the form does after its submit hook returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// The default submit action continues
    Proceed,
    /// The default submit action is cancelled
    Prevented,
}

/// A loaded page with both scripts attached
pub struct Page {
    ready: ReadySignal,
    dismisser: AlertDismisser,
    guard: PasswordGuard,
}

impl Page {
    /// Attach the page scripts to `document`.
    /// The alert timer is armed when [`fire_ready`](Self::fire_ready) is called.
    pub fn new(document: Arc<dyn Document>, notifier: Arc<dyn Notifier>) -> Result<Self, PageError> {
        let ready = ReadySignal::new();
        let dismisser = AlertDismisser::new(document.clone());
        dismisser.install(&ready)?;
        let guard = PasswordGuard::new(document, notifier);

        Ok(Self {
            ready,
            dismisser,
            guard,
        })
    }

    /// Signal that the initial document has loaded. Only the first call has an effect.
    pub fn fire_ready(&self) -> bool {
        self.ready.fire()
    }

    /// The dismissal armed by the ready signal, once
    pub fn pending_dismissal(&self) -> Option<DismissHandle> {
        self.dismisser.take_pending()
    }

    /// Run the form's submit hook
    pub fn submit_form(&self) -> SubmitOutcome {
        let outcome = if self.guard.validate_form() {
            SubmitOutcome::Proceed
        } else {
            SubmitOutcome::Prevented
        };
        info!(?outcome, "form submit");
        outcome
    }

    pub fn guard(&self) -> &PasswordGuard {
        &self.guard
    }
}
