//! Error types for format and transform operations

use thiserror::Error;

/// Errors that can occur outside the builders
#[derive(Debug, Error)]
pub enum Error {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// Option value that does not name a known variant
    #[error("Invalid value '{value}' for {option}")]
    InvalidOption { option: &'static str, value: String },

    /// Error during JSON serialization
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
