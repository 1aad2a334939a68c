//! Source format detection, text decoding and package signatures.

use crate::error::{Error, Result};
use std::path::Path;

/// UTF-8 byte-order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Local file header signature that starts every zip (and so every DOCX).
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Kind of source a document can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Markdown-like text
    Markdown,
    /// JSON content table
    ContentTable,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Markdown => write!(f, "Markdown"),
            SourceFormat::ContentTable => write!(f, "content table"),
        }
    }
}

/// Detect the source format from a path's extension.
///
/// # Returns
/// * `Ok(SourceFormat)` for `.md`, `.markdown`, `.txt` and `.json`
/// * `Err(Error::UnsupportedFormat)` for anything else, including no extension
///
/// # Example
/// ```
/// use mdocx::detect::{detect_format_from_path, SourceFormat};
///
/// let format = detect_format_from_path("notes.md").unwrap();
/// assert_eq!(format, SourceFormat::Markdown);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
    format_for_extension(ext).ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
}

/// Map a file extension (case-insensitive) to a source format.
pub fn format_for_extension(ext: &str) -> Option<SourceFormat> {
    match ext.to_ascii_lowercase().as_str() {
        "md" | "markdown" | "txt" => Some(SourceFormat::Markdown),
        "json" => Some(SourceFormat::ContentTable),
        _ => None,
    }
}

/// Guess the source format from content.
///
/// Text whose first non-whitespace character is `{` is taken to be a
/// content table; everything else is Markdown.
pub fn detect_format_from_bytes(data: &[u8]) -> SourceFormat {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => SourceFormat::ContentTable,
        _ => SourceFormat::Markdown,
    }
}

/// Decode UTF-8 text, skipping a leading byte-order mark.
///
/// Invalid input is rejected with the byte offset of the first bad sequence.
pub fn decode_text(data: &[u8]) -> Result<&str> {
    let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    std::str::from_utf8(body).map_err(|e| {
        let offset = data.len() - body.len() + e.valid_up_to();
        Error::Encoding(offset)
    })
}

/// Check if bytes look like a zip package (the container used by DOCX).
pub fn is_docx_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}
