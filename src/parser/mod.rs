//! HTTP request-line parser.
//!
//! Only the first line of a request is ever consumed. The path is kept exactly
//! as it appeared on the wire: no percent-decoding and no query stripping.

mod request;
mod error;

// Re-export public items
pub use request::RequestLine;
pub use error::Error;

pub use request::{parse_request_line, parse_strict_request_line};
