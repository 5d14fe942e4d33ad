//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::server::error::Error;

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8088;

/// HTTP server configuration.
///
/// Every field has a default, so a JSON file only needs to name the fields it
/// changes:
///
/// ```
/// use statichttp_rs::ServerConfig;
///
/// let config = ServerConfig::from_json_str(r#"{ "document_root": "site" }"#).unwrap();
/// assert_eq!(config.document_root.to_str(), Some("site"));
/// assert_eq!(config.index_file, "index.html");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Directory all request paths are resolved under.
    pub document_root: PathBuf,
    /// File served in place of a directory listing when present.
    pub index_file: String,
    /// Upper bound, in bytes, on the request line.
    pub read_buffer_size: usize,
    /// Reject paths containing `..` segments.
    pub confine_to_root: bool,
    /// Answer malformed request lines with 400 instead of best-effort parsing.
    pub strict_request_line: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            document_root: PathBuf::from("public"),
            index_file: "index.html".to_string(),
            read_buffer_size: 8192,
            confine_to_root: true,
            strict_request_line: false,
        }
    }
}

impl ServerConfig {
    /// Create a default configuration serving the given directory.
    pub fn with_document_root(document_root: impl Into<PathBuf>) -> Self {
        Self {
            document_root: document_root.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the values that would make the server misbehave.
    pub fn validate(&self) -> Result<(), Error> {
        if self.index_file.is_empty() {
            return Err(Error::InvalidConfig("index_file must not be empty".to_string()));
        }
        if self.index_file.contains('/') || self.index_file == ".." || self.index_file == "." {
            return Err(Error::InvalidConfig(format!(
                "index_file must be a plain file name, got {:?}",
                self.index_file
            )));
        }
        if self.read_buffer_size == 0 {
            return Err(Error::InvalidConfig("read_buffer_size must be greater than zero".to_string()));
        }
        Ok(())
    }
}
