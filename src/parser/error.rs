//! Error types for the request-line parser.

use thiserror::Error;

/// Errors that can occur while reading or parsing a request line.
#[derive(Debug, Error)]
pub enum Error {
    /// The connection produced no request line, or an empty one.
    #[error("Empty request")]
    EmptyRequest,

    /// The request line did not end within the read buffer.
    #[error("Request line exceeds {0} bytes")]
    RequestLineTooLong(usize),

    /// The request line failed strict validation.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),
}
