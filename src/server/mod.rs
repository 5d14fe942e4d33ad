//! Static file server.
//!
//! A sequential accept loop hands each connection to a
//! [`StaticFileResponder`], which resolves the request path against the
//! document root and answers with a file, a directory listing or a 404.

mod response;
mod config;
mod error;
mod handler;
mod http_server;
mod listing;
mod mime;
mod resolver;

// Re-export public items
pub use response::{HttpResponse, StatusCode, HTML_UTF8};
pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::Error;
pub use handler::StaticFileResponder;
pub use http_server::HttpServer;
pub use listing::{escape_html, normalize_listing_uri, parent_uri, read_entries, render_listing, DirectoryEntry};
pub use mime::{content_type_for, DEFAULT_CONTENT_TYPE, MIME_TABLE};
pub use resolver::{PathResolver, ResolvedTarget};
