//! The static file responder: one request line in, one response out.

use std::io;
use std::path::Path;

use log::debug;
use tokio::fs;

use crate::parser::RequestLine;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::listing::{read_entries, render_listing};
use crate::server::mime::content_type_for;
use crate::server::resolver::{PathResolver, ResolvedTarget};
use crate::server::response::{HttpResponse, HTML_UTF8};

/// Serves files, index files and directory listings from a document root.
#[derive(Debug, Clone)]
pub struct StaticFileResponder {
    resolver: PathResolver,
}

impl StaticFileResponder {
    /// Create a responder for the configured document root.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            resolver: PathResolver::new(config),
        }
    }

    /// The resolver requests are dispatched through.
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Build the response for a request.
    ///
    /// # Returns
    ///
    /// The file or listing response, `Error::NotFound` carrying the request
    /// path if nothing is there, or the I/O error that interrupted reading.
    pub async fn respond(&self, request: &RequestLine) -> Result<HttpResponse, Error> {
        match self.resolver.resolve(&request.path).await {
            ResolvedTarget::File(path) => self.serve_file(&path, &request.path).await,
            ResolvedTarget::Directory { path, is_root } => {
                self.serve_listing(&path, &request.path, is_root).await
            }
            ResolvedTarget::Missing => Err(Error::NotFound(request.path.clone())),
        }
    }

    async fn serve_file(&self, path: &Path, uri: &str) -> Result<HttpResponse, Error> {
        // The file may vanish between resolution and the read.
        let body = fs::read(path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(uri.to_string()),
            _ => Error::IoError(e),
        })?;

        let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        let content_type = content_type_for(&file_name);
        debug!("Serving {} ({content_type}, {} bytes)", path.display(), body.len());

        Ok(HttpResponse::ok(content_type, body))
    }

    async fn serve_listing(&self, dir: &Path, uri: &str, is_root: bool) -> Result<HttpResponse, Error> {
        let entries = read_entries(dir).await?;
        let title = match dir.file_name() {
            Some(name) if !is_root => name.to_string_lossy().into_owned(),
            _ => "/".to_string(),
        };
        debug!("Listing {} ({} entries)", dir.display(), entries.len());

        Ok(HttpResponse::ok(HTML_UTF8, render_listing(&title, uri, &entries, is_root)))
    }
}
