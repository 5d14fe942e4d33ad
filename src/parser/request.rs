//! Request-line parsing and representation.

use std::fmt;

use crate::parser::error::Error;

/// Path used when the request line carries no path token.
pub const DEFAULT_PATH: &str = "/";

/// The first line of an HTTP request.
///
/// Method and version are carried along for logging only; dispatch looks at
/// nothing but the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The method token, unvalidated.
    pub method: String,
    /// The raw request path.
    pub path: String,
    /// The version token, if the line had one.
    pub version: Option<String>,
}

impl RequestLine {
    /// Create a request line from its parts.
    pub fn new(method: impl Into<String>, path: impl Into<String>, version: Option<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            version,
        }
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {} {version}", self.method, self.path),
            None => write!(f, "{} {}", self.method, self.path),
        }
    }
}

/// Strip the line terminator left behind by a line read.
fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Parse a request line leniently.
///
/// The line is split on single spaces with trailing empty tokens dropped. A
/// missing or empty second token yields a path of `/`. Nothing about the
/// method or version is checked.
///
/// # Returns
///
/// The parsed line, or `Error::EmptyRequest` if the line is empty
pub fn parse_request_line(line: &str) -> Result<RequestLine, Error> {
    let line = trim_line_ending(line);
    if line.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let mut parts: Vec<&str> = line.split(' ').collect();
    while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    let method = parts[0];
    let path = match parts.get(1) {
        Some(path) if !path.is_empty() => *path,
        _ => DEFAULT_PATH,
    };
    let version = parts.get(2).map(|v| v.to_string());

    Ok(RequestLine::new(method, path, version))
}

/// Parse a request line, requiring `<METHOD> <PATH> HTTP/<version>`.
///
/// The method must consist of word characters, the path of non-whitespace,
/// and the third token must start with `HTTP/`. Any amount of whitespace may
/// separate the tokens and anything after the version is ignored.
pub fn parse_strict_request_line(line: &str) -> Result<RequestLine, Error> {
    let line = trim_line_ending(line);
    if line.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let malformed = || Error::MalformedRequestLine(line.to_string());

    if line.starts_with(char::is_whitespace) {
        return Err(malformed());
    }

    let mut tokens = line.split_whitespace();
    let method = tokens.next().ok_or_else(malformed)?;
    let path = tokens.next().ok_or_else(malformed)?;
    let version = tokens.next().ok_or_else(malformed)?;

    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    if !method.chars().all(is_word) || !version.starts_with("HTTP/") {
        return Err(malformed());
    }

    Ok(RequestLine::new(method, path, Some(version.to_string())))
}
