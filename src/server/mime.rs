//! Content-Type lookup by file name suffix.

/// Fallback for any suffix not in [`MIME_TABLE`].
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Suffixes checked in order; the first match wins. Matching is exact and
/// case-sensitive, so `LOGO.PNG` is not an image.
pub const MIME_TABLE: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".htm", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".ico", "image/x-icon"),
    (".pdf", "application/pdf"),
];

/// Get the Content-Type for a file name.
///
/// # Examples
/// ```
/// use statichttp_rs::server::content_type_for;
/// assert_eq!(content_type_for("index.html"), "text/html");
/// assert_eq!(content_type_for("app.js"), "application/javascript");
/// assert_eq!(content_type_for("notes.txt"), "application/octet-stream");
/// ```
pub fn content_type_for(file_name: &str) -> &'static str {
    MIME_TABLE
        .iter()
        .find(|(suffix, _)| file_name.ends_with(suffix))
        .map_or(DEFAULT_CONTENT_TYPE, |(_, content_type)| content_type)
}
