// crates/page-lib/src/guard.rs

//! Submit-time password check for the registration form.
use std::sync::Arc;

use ecotrack_common::PASSWORD_FIELD_ID;
use metrics::counter;
use tracing::{debug, error, warn};

use crate::dom::Document;
use crate::metrics::{PASSWORD_ACCEPTED, PASSWORD_FIELD_MISSING, PASSWORD_REJECTED};
use crate::notify::Notifier;
use crate::validation::validate_password_length;

/// Validates the `password` field before the form is submitted
#[derive(Clone)]
pub struct PasswordGuard {
    document: Arc<dyn Document>,
    notifier: Arc<dyn Notifier>,
}

impl PasswordGuard {
    pub fn new(document: Arc<dyn Document>, notifier: Arc<dyn Notifier>) -> Self {
        Self { document, notifier }
    }

    /// Returns `true` when submission may proceed.
    ///
    /// A short password notifies the user once and blocks. A missing or
    /// unreadable field blocks without notifying.
    pub fn validate_form(&self) -> bool {
        let password = match self.document.field_value(PASSWORD_FIELD_ID) {
            Ok(value) => value,
            Err(e) => {
                counter!(PASSWORD_FIELD_MISSING).increment(1);
                error!(error = %e, code = e.error_code(), "password field unavailable; blocking submit");
                return false;
            },
        };

        match validate_password_length(&password) {
            Ok(()) => {
                counter!(PASSWORD_ACCEPTED).increment(1);
                debug!("password length accepted");
                true
            },
            Err(e) => {
                counter!(PASSWORD_REJECTED).increment(1);
                warn!(reason = %e, "password rejected");
                self.notifier.notify(&e.to_string());
                false
            },
        }
    }
}
