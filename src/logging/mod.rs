//! Tracing subscriber initialization.
//!
//! Logs are written to a file instead of the terminal, which belongs to the
//! sheet while it is open. Users can monitor logs via `tail -f` in a separate
//! terminal, e.g. with `RUST_LOG=sheetline=debug` to watch stop transitions.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Respect RUST_LOG, default to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Plain-text subscriber writing through `writer`.
fn subscriber<W>(writer: W, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false) // No ANSI colors in log files
        .finish()
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Creates the log directory if it doesn't exist.
///
/// # Returns
/// * `Ok(())` if initialization succeeded
/// * `Err(LoggingError)` if the subscriber was already initialized or directory creation failed
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    // A bare file name has an empty parent: log next to the working directory
    if !directory.as_os_str().is_empty() {
        std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
            path: directory.to_path_buf(),
            source,
        })?;
    }

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    tracing::subscriber::set_global_default(subscriber(file_appender, env_filter()))
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
