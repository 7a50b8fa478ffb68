//! Error types for pattern configuration

use thiserror::Error;

/// Errors that can occur while building pattern tables.
///
/// Reading a message never fails; only loading and compiling a
/// [`PatternConfig`](crate::PatternConfig) can.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A pattern failed to compile
    #[error("Invalid pattern #{index} in table {table}: {source}")]
    Pattern {
        table: &'static str,
        index: usize,
        #[source]
        source: regex::Error,
    },

    /// The configuration document could not be decoded
    #[error("Failed to decode pattern configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A table the parser cannot work without is empty
    #[error("Pattern table {0} must not be empty")]
    EmptyTable(&'static str),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
