//! HTTP response types and serialization.

use crate::server::listing::escape_html;

/// Content type of every generated HTML page.
pub const HTML_UTF8: &str = "text/html; charset=UTF-8";

/// HTTP status codes the server produces, with their reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
}

impl StatusCode {
    /// Get the numeric code.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Represents an HTTP response.
///
/// Headers are kept in insertion order so the serialized header block is
/// stable. `Content-Length` is always written from the actual body length,
/// appended after the other headers if it was never set.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers, in the order they are written
    pub headers: Vec<(String, String)>,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code and an empty body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// A `200 OK` response with the given content type and body.
    pub fn ok(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::Ok)
            .with_content_type(content_type)
            .with_body_bytes(body)
    }

    /// An HTML error page that also asks the client to close the connection.
    /// The message is escaped.
    pub fn error_page(status: StatusCode, message: &str) -> Self {
        Self::error_page_html(status, &escape_html(message))
    }

    /// The 404 page for a request path.
    ///
    /// The path is echoed verbatim so the body always contains exactly what
    /// the client asked for; only the surrounding text is fixed.
    pub fn not_found(path: &str) -> Self {
        Self::error_page_html(
            StatusCode::NotFound,
            &format!("The resource {path} was not found on this server."),
        )
    }

    fn error_page_html(status: StatusCode, message_html: &str) -> Self {
        let body = format!(
            "<html><body style='font-family: Arial; text-align: center; color: #ff4444;'>\
             <h1>Error {code} - {reason}</h1><p>{message_html}</p></body></html>",
            code = status.as_u16(),
            reason = status.reason_phrase(),
        );
        Self::new(status)
            .with_content_type(HTML_UTF8)
            .with_body_string(body)
            .with_header("Connection", "close")
    }

    /// Set the response body with a string.
    pub fn with_body_string(self, body: impl Into<String>) -> Self {
        self.with_body_bytes(body.into().into_bytes())
    }

    /// Set the response body with bytes.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        let content_length = self.body.len().to_string();
        self.with_header("Content-Length", content_length)
    }

    /// Add or replace a header. Names compare case-insensitively; a replaced
    /// header keeps its position.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Look up a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(128 + self.body.len());

        let status_line = format!("HTTP/1.1 {} {}\r\n", self.status.as_u16(), self.status.reason_phrase());
        bytes.extend_from_slice(status_line.as_bytes());

        let content_length = self.body.len().to_string();
        let mut wrote_length = false;
        for (name, value) in &self.headers {
            let value = if name.eq_ignore_ascii_case("Content-Length") {
                wrote_length = true;
                content_length.as_str()
            } else {
                value.as_str()
            };
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }
        if !wrote_length {
            let header_line = format!("Content-Length: {content_length}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(&self.body);

        bytes
    }
}
