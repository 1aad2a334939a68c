//! Error types for mdocx library.

use std::io;
use thiserror::Error;

/// Result type alias for mdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading sources or writing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    #[error("Encoding error: invalid UTF-8 at byte {0}")]
    Encoding(usize),

    /// The source file type is not handled by any converter.
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    /// A content table or style sheet could not be read.
    #[error("Invalid content: {0}")]
    Content(String),

    /// Error while assembling the OOXML package.
    #[error("Package error: {0}")]
    Package(String),

    /// Error during rendering (DOCX, Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Content(err.to_string())
    }
}
