//! Error types for the marquee application.
//!
//! The scrolling core itself cannot fail: every branch over target kinds is
//! total and the arithmetic is defined for any viewport. Failures only arise
//! in the shell around it (reading items, loading config, initializing
//! logging, driving the terminal).
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`InputError`] - Reading ticker items from a file or stdin
//!   - [`ConfigError`](crate::config::ConfigError) - Config file loading and validation
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup
//!   - [`TuiError`](crate::view::TuiError) - Terminal setup and rendering

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Every variant is fatal: the binary reports it on stderr and exits with a
/// non-zero status. Domain errors convert via `From`, so `main` can use `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Ticker items could not be read.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// File logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when reading ticker items from files or stdin.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use marquee::model::error::InputError;
///
/// let err = InputError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.txt")
/// };
/// assert!(err.to_string().contains("/tmp/missing.txt"));
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// The item file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// No items anywhere: no file argument, stdin is a terminal, and the
    /// config file has no `[[items]]`.
    ///
    /// ```
    /// use marquee::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("pipe lines to stdin"));
    /// ```
    #[error("No items: provide a file path, pipe lines to stdin, or add [[items]] to the config")]
    NoInput,

    /// Any other I/O failure while reading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
