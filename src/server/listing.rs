//! Directory listing pages.

use std::io;
use std::path::Path;

use tokio::fs;

const LISTING_STYLE: &str = "body{font-family: Arial, sans-serif;} \
    a{color: #0066cc; text-decoration: none;} a:hover{text-decoration: underline;} \
    li{margin: 5px 0; list-style-type: none;}";

const FOLDER_ICON: &str = "&#x1F4C1;";
const FILE_ICON: &str = "&#128462;";
const BACK_ICON: &str = "&#128072;";

/// A direct child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File name of the child.
    pub name: String,
    /// Whether the child is a directory (following symlinks).
    pub is_dir: bool,
}

/// Read the children of `dir` that are regular files or directories, sorted
/// by name.
///
/// Entries whose metadata cannot be read, such as dangling symlinks, are
/// skipped.
pub async fn read_entries(dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let Ok(metadata) = fs::metadata(entry.path()).await else {
            continue;
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if metadata.is_dir() {
            entries.push(DirectoryEntry { name, is_dir: true });
        } else if metadata.is_file() {
            entries.push(DirectoryEntry { name, is_dir: false });
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Make sure a listing URI ends in `/` so child names can be appended.
pub fn normalize_listing_uri(uri: &str) -> String {
    if uri.ends_with('/') {
        uri.to_string()
    } else {
        format!("{uri}/")
    }
}

/// The URI one level above a normalized listing URI.
///
/// ```
/// use statichttp_rs::server::parent_uri;
/// assert_eq!(parent_uri("/docs/"), "/");
/// assert_eq!(parent_uri("/docs/api/"), "/docs/");
/// ```
pub fn parent_uri(listing_uri: &str) -> String {
    let trimmed = listing_uri.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => trimmed[..=idx].to_string(),
        None => "/".to_string(),
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the HTML listing of a directory.
///
/// `listing_uri` is the request URI; links to children are built by appending
/// each name to it. The back link is omitted for the document root.
pub fn render_listing(title: &str, listing_uri: &str, entries: &[DirectoryEntry], is_root: bool) -> String {
    let base = normalize_listing_uri(listing_uri);
    let title = escape_html(title);

    let mut body = String::with_capacity(512 + entries.len() * 64);
    body.push_str(&format!(
        "<html><head><title>Index of {title}</title><style>{LISTING_STYLE}</style></head>\
         <body><h1>Contents of: {title}</h1><ul>"
    ));

    if !is_root {
        body.push_str(&format!(
            "<li style='padding-bottom: 20px;'>{BACK_ICON} <a href=\"{}\"><b>Back</b></a></li>",
            escape_html(&parent_uri(&base))
        ));
    }

    if entries.is_empty() {
        body.push_str("<li><b>Empty directory</b></li>");
    }

    for entry in entries {
        let name = escape_html(&entry.name);
        let href = escape_html(&format!("{base}{}", entry.name));
        if entry.is_dir {
            body.push_str(&format!("<li>{FOLDER_ICON} <a href=\"{href}/\">{name}</a></li>"));
        } else {
            body.push_str(&format!("<li>{FILE_ICON} <a href=\"{href}\">{name}</a></li>"));
        }
    }

    body.push_str("</ul></body></html>");
    body
}
