//! Error types for the morph-filter library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`FilterError`]. Errors fall into three groups:
//!
//! - configuration errors, raised at plan/open time before any record is read
//! - backend initialization errors, raised while loading dictionaries
//! - analysis errors, raised by a tokenizer engine while a stream is running
//!
//! None of them are retried.
//!
//! # Examples
//!
//! ```
//! use morph_filter::error::{FilterError, Result};
//!
//! fn check(names: &[&str]) -> Result<()> {
//!     if names.is_empty() {
//!         return Err(FilterError::configuration("key_names must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(&[]).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for morph-filter operations.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Invalid or inconsistent configuration (missing key field, bad type, ...).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A tokenizer backend could not be constructed.
    #[error("Backend initialization error{}: {message}", path.as_deref().map(|p| format!(" ({p})")).unwrap_or_default())]
    BackendInitialization {
        /// Dictionary path or URI that failed to load, when known.
        path: Option<String>,
        /// Description of the failure.
        message: String,
    },

    /// Tokenization failed inside the morphological engine.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (config files, record input and output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with FilterError.
pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        FilterError::Configuration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FilterError::Analysis(msg.into())
    }

    /// Create a new backend initialization error for the given dictionary path.
    pub fn backend_initialization<P, S>(path: Option<P>, msg: S) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        FilterError::BackendInitialization {
            path: path.map(Into::into),
            message: msg.into(),
        }
    }

    /// Whether this error was raised during planning or stream setup.
    pub fn is_configuration(&self) -> bool {
        matches!(self, FilterError::Configuration(_))
    }
}
