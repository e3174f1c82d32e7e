//! Error types for paint decoding and the command-line front end

use thiserror::Error;

/// Result type alias for paintstyle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading paint descriptions
///
/// Composition itself never fails; these only surface at the decoding and
/// CLI boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// The input was not a valid paint document
    #[error("Invalid paint JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
