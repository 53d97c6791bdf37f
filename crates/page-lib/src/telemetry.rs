// crates/page-lib/src/telemetry.rs

//! Log subscriber setup for hosts embedding the page runtime.
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, Settings};
use crate::error::PageError;

/// Install the global `tracing` subscriber described by `settings`.
///
/// `RUST_LOG` wins over the configured level when present.
pub fn init(settings: &Settings) -> Result<(), PageError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .map_err(|e| PageError::Config(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| PageError::Internal(format!("Failed to install subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_subscriber_installs_once() {
        let settings = Settings::default();
        assert_eq!(settings.log_format, LogFormat::Pretty);

        // Only this test touches the global subscriber
        assert!(init(&settings).is_ok());
        assert!(matches!(init(&settings), Err(PageError::Internal(_))));
    }

    #[test]
    fn test_bad_filter_is_a_config_error() {
        let settings = Settings {
            log_level: "ecotrack_page=loud".to_string(),
            ..Settings::default()
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(init(&settings), Err(PageError::Config(_))));
        }
    }
}
