//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Error reading or parsing the request line.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON deserialization error while loading configuration.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
