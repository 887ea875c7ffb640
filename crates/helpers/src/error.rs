//! Error types for helper operations.
//!
//! Helpers never hand these back to callers directly: a failed helper
//! returns `None` and the error travels to a fault reporter wrapped in a
//! [`Fault`]. Configuration loading is the exception and returns
//! [`ConfigError`].

use std::fmt;

use thiserror::Error;

/// Cause of a failed helper operation.
#[derive(Debug, Error)]
pub enum HelperError {
    /// Reading an asset or other stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A strftime pattern contained an unknown or malformed specifier
    #[error("Invalid date pattern: {0:?}")]
    Pattern(String),

    /// Input text did not match the date pattern
    #[error("Date parse error: {0}")]
    Parse(#[from] chrono::ParseError),

    /// Date arithmetic left chrono's representable range
    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

impl HelperError {
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }
}

/// A failure captured by the safe-operation wrapper.
///
/// Carries the underlying [`HelperError`] and the name of the helper
/// operation it originated from.
#[derive(Debug)]
pub struct Fault {
    operation: &'static str,
    error: HelperError,
}

impl Fault {
    pub fn new(operation: &'static str, error: HelperError) -> Self {
        Self { operation, error }
    }

    /// Name of the helper operation that failed (e.g. `"read_asset_text"`).
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn error(&self) -> &HelperError {
        &self.error
    }

    pub fn into_error(self) -> HelperError {
        self.error
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.error)
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Configuration loading failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown locale: {0:?}")]
    UnknownLocale(String),

    #[error("Invalid UTC offset {value:?}: expected a form like +05:30")]
    InvalidOffset { value: String },

    #[error("Failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}
