//! Mapping request paths onto the document root.

use std::path::{Path, PathBuf};

use log::warn;
use tokio::fs;

use crate::server::config::ServerConfig;

/// What a request path refers to on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// A file to send as-is. For directories this is their index file.
    File(PathBuf),
    /// A directory without an index file.
    Directory {
        /// Location of the directory.
        path: PathBuf,
        /// Whether this is the document root itself.
        is_root: bool,
    },
    /// Nothing servable exists at the path.
    Missing,
}

/// Resolves raw request paths against a document root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    document_root: PathBuf,
    index_file: String,
    confine_to_root: bool,
}

impl PathResolver {
    /// Create a resolver from the server configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            document_root: config.document_root.clone(),
            index_file: config.index_file.clone(),
            confine_to_root: config.confine_to_root,
        }
    }

    /// The directory paths are resolved under.
    pub fn document_root(&self) -> &Path {
        &self.document_root
    }

    /// Strip a single leading `/` from a request path.
    pub fn relative_path(uri: &str) -> &str {
        uri.strip_prefix('/').unwrap_or(uri)
    }

    /// Join a relative request path onto the document root.
    ///
    /// Segments are pushed one at a time and empty ones skipped, so neither
    /// `//etc` nor a trailing slash can turn the join absolute. Returns `None`
    /// for paths with a `..` segment when confinement is on.
    pub fn join(&self, relative: &str) -> Option<PathBuf> {
        let mut path = self.document_root.clone();
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            if segment == ".." && self.confine_to_root {
                return None;
            }
            path.push(segment);
        }
        Some(path)
    }

    /// Whether `path` names the document root itself, looking through `.`,
    /// `..` and symlinks when both paths exist.
    async fn is_document_root(&self, path: &Path) -> bool {
        match (fs::canonicalize(path).await, fs::canonicalize(&self.document_root).await) {
            (Ok(path), Ok(root)) => path == root,
            _ => path == self.document_root,
        }
    }

    /// Classify a request path.
    pub async fn resolve(&self, uri: &str) -> ResolvedTarget {
        let relative = Self::relative_path(uri);
        let Some(candidate) = self.join(relative) else {
            warn!("Rejected path escaping the document root: {uri}");
            return ResolvedTarget::Missing;
        };

        let metadata = fs::metadata(&candidate).await.ok();
        let is_dir = metadata.as_ref().is_some_and(|m| m.is_dir());

        if relative.is_empty() || is_dir {
            let index = candidate.join(&self.index_file);
            if matches!(fs::metadata(&index).await, Ok(m) if !m.is_dir()) {
                return ResolvedTarget::File(index);
            }
            if is_dir {
                let is_root = self.is_document_root(&candidate).await;
                return ResolvedTarget::Directory { path: candidate, is_root };
            }
        }

        match metadata {
            Some(m) if !m.is_dir() => ResolvedTarget::File(candidate),
            _ => ResolvedTarget::Missing,
        }
    }
}
