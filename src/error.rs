//! Error types for pocket-tools

use thiserror::Error;

/// Main error type for pocket-tools
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Malformed rate table: {0}")]
    MalformedRateTable(String),

    #[error("Unknown currency: {}", .codes.join(", "))]
    UnknownCurrency { codes: Vec<String> },

    #[error("Invalid rate for {code}: {value} (must be a positive number)")]
    InvalidRate { code: String, value: String },

    #[error("Conversion result out of range: {0}")]
    ResultOutOfRange(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ToolError {
    /// Currency codes reported as missing, if this is an `UnknownCurrency`
    pub fn unknown_codes(&self) -> &[String] {
        match self {
            ToolError::UnknownCurrency { codes } => codes,
            _ => &[],
        }
    }
}

/// Result type alias for pocket-tools operations
pub type Result<T> = std::result::Result<T, ToolError>;
