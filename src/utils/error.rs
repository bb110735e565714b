//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading and validating a dataset
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read dataset: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid year-month '{0}' (expected YYYY-M)")]
    InvalidYearMonth(String),

    #[error("Invalid record in {collection}[{index}]: {reason}")]
    InvalidRecord {
        collection: &'static str,
        index: usize,
        reason: String,
    },
}

/// Errors raised while interpreting a user selection
#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("Click payload is missing field: {0}")]
    MissingField(String),
}

/// Errors that can occur while loading the dashboard configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
