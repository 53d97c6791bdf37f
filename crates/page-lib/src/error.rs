// crates/page-lib/src/error.rs

//! Central error type for the page runtime.
use thiserror::Error;

/// Page runtime error types with error codes and context
#[derive(Error, Debug)]
pub enum PageError {
    #[error("No element with id '{id}'")]
    MissingElement { id: String },

    #[error("Element '{id}' has no value")]
    NotAField { id: String },

    #[error("Element handle {0} does not belong to this document")]
    StaleHandle(usize),

    #[error("Ready signal already fired")]
    AlreadyReady,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PageError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PageError::MissingElement { .. } => "DOM_001",
            PageError::NotAField { .. } => "DOM_002",
            PageError::StaleHandle(_) => "DOM_003",
            PageError::AlreadyReady => "LIFE_001",
            PageError::Config(_) => "CFG_001",
            PageError::Internal(_) => "INT_001",
        }
    }
}

impl From<figment::Error> for PageError {
    fn from(err: figment::Error) -> Self {
        PageError::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for PageError {
    fn from(err: tokio::task::JoinError) -> Self {
        PageError::Internal(format!("Deferred task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_display() {
        let missing = PageError::MissingElement {
            id: "password".to_string(),
        };
        assert_eq!(missing.to_string(), "No element with id 'password'");

        let config = PageError::Config("bad filter".to_string());
        assert_eq!(config.to_string(), "Configuration error: bad filter");

        assert_eq!(PageError::AlreadyReady.to_string(), "Ready signal already fired");
    }

    #[test]
    fn test_page_error_codes() {
        assert_eq!(
            PageError::MissingElement { id: "x".to_string() }.error_code(),
            "DOM_001"
        );
        assert_eq!(PageError::NotAField { id: "x".to_string() }.error_code(), "DOM_002");
        assert_eq!(PageError::StaleHandle(7).error_code(), "DOM_003");
        assert_eq!(PageError::AlreadyReady.error_code(), "LIFE_001");
        assert_eq!(PageError::Config(String::new()).error_code(), "CFG_001");
    }

    #[test]
    fn test_error_from_impls() {
        let figment_err = figment::Figment::new()
            .extract::<crate::config::Settings>()
            .unwrap_err();
        let page_err: PageError = figment_err.into();
        assert!(matches!(page_err, PageError::Config(_)));
    }
}
