//! Error types for sheetline.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose
//! via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`ConfigError`](crate::config::ConfigError) - Config file lookup, read and parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - [`InputError`] - Reading the sheet body from a file or stdin
//!   - [`TuiError`](crate::view::TuiError) - Terminal setup and rendering failures
//! - [`ParseError`] - Rejected textual values (categories, roles, stop policies, button specs)
//!
//! # Sizing never fails
//!
//! The sizing core (`sizing`) has no error type. Measurements come from a
//! trusted layout pass; degenerate values are clamped and logged instead of
//! being reported, so every recompute produces exactly one stop.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// All domain-specific errors convert into `AppError` via `From`, so the
/// binary can use `?` throughout.
///
/// # Examples
///
/// ```
/// use sheetline::model::error::{AppError, InputError};
/// use std::path::PathBuf;
///
/// fn read() -> Result<(), AppError> {
///     Err(InputError::FileNotFound { path: PathBuf::from("/tmp/missing.txt") })?;
///     Ok(())
/// }
///
/// assert!(read().unwrap_err().to_string().contains("missing.txt"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or contained an invalid value.
    ///
    /// **Recovery**: print the message and exit. Missing config files are not
    /// errors and never reach this variant.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The sheet body could not be read.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Terminal setup, event polling or rendering failed.
    ///
    /// **Recovery**: the terminal is restored before this error is returned.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when reading the sheet body.
#[derive(Debug, Error)]
pub enum InputError {
    /// The body file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use sheetline::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Any other I/O failure while reading the body.
    #[error("I/O error reading {source_name}: {source}")]
    Io {
        /// File path, or `stdin`.
        source_name: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A textual value that does not name anything sheetline knows.
///
/// Returned by the `FromStr` impls of the model types; clap and the config
/// loader surface the message unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not a [`SheetCategory`](super::SheetCategory) name.
    #[error("unknown category '{0}' (expected one of: info, error, confirm, help, success, location, calendar, call, phone-alert, attachment, reminder, none)")]
    UnknownCategory(String),

    /// Not a [`ButtonRole`](super::ButtonRole) name.
    #[error("unknown button role '{0}' (expected one of: primary, destructive, cancel, default)")]
    UnknownRole(String),

    /// Not a [`StopPolicy`](super::StopPolicy) name.
    #[error("unknown stop policy '{0}' (expected 'exact' or 'include-medium')")]
    UnknownStopPolicy(String),

    /// A button spec with an empty label.
    #[error("invalid button '{0}' (expected LABEL or LABEL:role)")]
    InvalidButtonSpec(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_into_app_error() {
        let err: AppError = InputError::FileNotFound {
            path: PathBuf::from("/nope"),
        }
        .into();
        assert!(matches!(err, AppError::Input(_)));
        assert!(err.to_string().starts_with("Failed to read input"));
    }

    #[test]
    fn io_error_names_its_source() {
        let err = InputError::Io {
            source_name: "stdin".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        let message = err.to_string();
        assert!(message.contains("stdin"));
        assert!(message.contains("pipe closed"));
    }

    #[test]
    fn parse_error_lists_valid_choices() {
        let err = ParseError::UnknownStopPolicy("loose".to_string());
        assert!(err.to_string().contains("include-medium"));
    }
}
