// ==============
// crates/page-lib/src/metrics.rs

//! Central place for metric keys
pub const ALERTS_SCHEDULED: &str = "alerts.scheduled";
pub const ALERTS_HIDDEN: &str = "alerts.hidden";
pub const PASSWORD_ACCEPTED: &str = "password.accepted";
pub const PASSWORD_REJECTED: &str = "password.rejected";
pub const PASSWORD_FIELD_MISSING: &str = "password.field_missing";
