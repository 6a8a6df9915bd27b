//! Core calculator module
//!
//! Everything a front-end needs to drive the calculator: the button
//! catalogue, the pending-operation arithmetic, display text handling, the
//! evaluator state machine and the in-memory tape of results.

pub mod button;
pub mod display;
pub mod evaluator;
pub mod history;
mod operations;
pub mod session;

pub use button::{Button, ButtonClass, ButtonTone};
pub use operations::PendingOperation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised around the evaluator.
///
/// The evaluator itself never fails; these cover turning user text into
/// buttons and loading configuration.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Text that names none of the 19 keypad buttons
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),

    /// Invalid configuration value
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error while reading a config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_unknown_button() {
        let err = CalcError::UnknownButton("sqrt".into());
        assert_eq!(format!("{err}"), "Unknown button: \"sqrt\"");
    }

    #[test]
    fn test_calc_error_display_config() {
        let err = CalcError::config("history_capacity must be positive");
        assert_eq!(
            format!("{err}"),
            "Configuration error: history_capacity must be positive"
        );
    }

    #[test]
    fn test_calc_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CalcError = io.into();
        assert!(matches!(err, CalcError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_calc_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CalcError = json_err.into();
        assert!(matches!(err, CalcError::Json(_)));
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::UnknownButton("?".into()));
        assert!(err.to_string().contains("Unknown button"));
    }
}
