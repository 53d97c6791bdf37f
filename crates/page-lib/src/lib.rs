// ============================
// ecotrack-page/src/lib.rs
// ============================
//! Page scripts for the `EcoTrack` web front end.
//!
//! Two independent behaviors run against an injected [`dom::Document`]:
//! flash banners are hidden five seconds after the page is ready, and the
//! registration form refuses passwords shorter than eight characters.

pub mod alerts;
pub mod config;
pub mod dom;
pub mod error;
pub mod guard;
pub mod lifecycle;
pub mod metrics;
pub mod notify;
pub mod page;
pub mod telemetry;
pub mod validation;

pub use alerts::{hide_alerts, AlertDismisser, DismissHandle, ALERT_DISMISS_DELAY};
pub use config::Settings;
pub use dom::{Document, ElementHandle, MemoryDocument};
pub use error::PageError;
pub use guard::PasswordGuard;
pub use lifecycle::ReadySignal;
pub use notify::{CapturingNotifier, FanOutNotifier, Notifier, TracingNotifier};
pub use page::{Page, SubmitOutcome};
