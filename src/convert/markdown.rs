//! Markdown-like text source converter.

use super::{ConvertOptions, DocumentConverter};
use crate::error::Result;
use crate::model::Document;
use crate::parser::MarkdownParser;

/// Converter for Markdown-like text files.
#[derive(Debug, Default)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    /// Create a new Markdown converter.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for MarkdownConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["md", "markdown", "txt"]
    }

    fn name(&self) -> &str {
        "Markdown"
    }

    fn load_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<Document> {
        MarkdownParser::new(options.parse.clone()).parse_bytes(bytes)
    }
}
