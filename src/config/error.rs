//! Configuration loading errors.

use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Parsed but semantically invalid
    #[error("Invalid config: {0}")]
    Invalid(String),
}
