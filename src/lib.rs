//! A minimal static file server.
//!
//! This library serves files from a document root over HTTP/1.1, one
//! connection at a time, one request per connection.
//!
//! # Features
//!
//! - Serve regular files with a Content-Type taken from a fixed suffix table
//! - Serve `index.html` for directory requests when it exists
//! - Generate HTML directory listings otherwise
//! - 404 pages naming the requested path
//! - Optional strict request-line checking answered with 400
//! - JSON configuration with defaults for every field
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use statichttp_rs::parse_request_line;
//!
//! let request = parse_request_line("GET /docs/ HTTP/1.1\r\n").unwrap();
//! assert_eq!(request.path, "/docs/");
//!
//! // A line with no path asks for the root.
//! let request = parse_request_line("GET\r\n").unwrap();
//! assert_eq!(request.path, "/");
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use statichttp_rs::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), statichttp_rs::ServerError> {
//! let server = HttpServer::new(ServerConfig::with_document_root("public"));
//! server.start().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a response
//!
//! ```
//! use statichttp_rs::{HttpResponse, StatusCode};
//!
//! let response = HttpResponse::not_found("/missing.txt");
//! assert_eq!(response.status, StatusCode::NotFound);
//! assert_eq!(response.header("Connection"), Some("close"));
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request_line, parse_strict_request_line, Error as ParserError, RequestLine};
pub use server::{
    Error as ServerError, HttpResponse, HttpServer, ResolvedTarget, ServerConfig, StaticFileResponder, StatusCode,
};
