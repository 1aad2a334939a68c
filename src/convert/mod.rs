//! Document converter module providing a plugin architecture for sources.
//!
//! Converters turn a source file (Markdown-like text, a JSON content table)
//! into a rendered output. The registry dispatches on file extension.
//!
//! # Example
//!
//! ```no_run
//! use mdocx::convert::{ConverterRegistry, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> mdocx::Result<()> {
//!     let registry = ConverterRegistry::with_defaults();
//!     let result = registry.convert(Path::new("proposal.md"), &ConvertOptions::default())?;
//!     result.save("proposal.docx")?;
//!     Ok(())
//! }
//! ```

mod content;
mod markdown;

pub use content::ContentTableConverter;
pub use markdown::MarkdownConverter;

use crate::error::{Error, Result};
use crate::model::{Document, Metadata};
use crate::parser::ParseOptions;
use crate::render::{to_docx, to_json, to_markdown, to_text, JsonFormat, RenderOptions, RenderStats, DOCX_MIME};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Translation options for Markdown sources
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,

    /// Title to use instead of the source's
    pub title: Option<String>,

    /// Author for the package properties
    pub author: Option<String>,

    /// Creation timestamp for the package properties
    pub created: Option<DateTime<Utc>>,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,

    /// Output format
    pub output_format: OutputFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set translation options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    fn apply_metadata(&self, metadata: &mut Metadata) {
        if let Some(ref title) = self.title {
            metadata.title = Some(title.clone());
        }
        if let Some(ref author) = self.author {
            metadata.author = Some(author.clone());
        }
        if let Some(created) = self.created {
            metadata.created = Some(created);
        }
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Word document
    #[default]
    Docx,

    /// Normalized Markdown
    Markdown,

    /// Plain text
    Text,

    /// JSON block model
    Json,
}

impl OutputFormat {
    /// MIME type of the output.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Docx => DOCX_MIME,
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }

    /// Conventional file extension of the output.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: Vec<u8>,

    /// Source document metadata
    pub metadata: Metadata,

    /// Block statistics (if collected)
    pub stats: Option<RenderStats>,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: Vec<u8>, metadata: Metadata) -> Self {
        Self {
            content,
            metadata,
            stats: None,
            mime_type: DOCX_MIME,
        }
    }

    /// Set block statistics.
    pub fn with_stats(mut self, stats: RenderStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Set MIME type.
    pub fn with_mime_type(mut self, mime_type: &'static str) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Get the content as text, for the text-based formats.
    pub fn as_text(&self) -> Option<&str> {
        if self.mime_type == DOCX_MIME {
            return None;
        }
        std::str::from_utf8(&self.content).ok()
    }

    /// Write the content to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.content)?;
        Ok(())
    }
}

/// Render a document model into the requested output format.
pub fn render_document(mut doc: Document, options: &ConvertOptions) -> Result<ConvertResult> {
    options.apply_metadata(&mut doc.metadata);

    let content = match options.output_format {
        OutputFormat::Docx => to_docx(&doc, &options.render)?,
        OutputFormat::Markdown => to_markdown(&doc, &options.render)?.into_bytes(),
        OutputFormat::Text => to_text(&doc)?.into_bytes(),
        OutputFormat::Json => to_json(&doc, JsonFormat::Pretty)?.into_bytes(),
    };

    let mut result = ConvertResult::new(content, doc.metadata.clone())
        .with_mime_type(options.output_format.mime_type());
    if options.collect_stats || options.render.collect_stats {
        result = result.with_stats(RenderStats::from_document(&doc));
    }
    Ok(result)
}

/// Trait for document converters.
///
/// Implement this trait to add support for a new source format.
pub trait DocumentConverter: Send + Sync {
    /// Get the supported file extensions for this converter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["md"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Build the document model from bytes.
    fn load_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<Document>;

    /// Build the document model from a file.
    fn load(&self, path: &Path, options: &ConvertOptions) -> Result<Document> {
        let bytes = std::fs::read(path)?;
        self.load_bytes(&bytes, options)
    }

    /// Convert a file at the given path.
    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let doc = self.load(path, options)?;
        render_document(doc, options)
    }

    /// Convert from bytes.
    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let doc = self.load_bytes(bytes, options)?;
        render_document(doc, options)
    }

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document converters.
///
/// The registry maps file extensions to converters and provides
/// convenient methods for converting documents.
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn DocumentConverter>>,
    by_name: HashMap<String, Arc<dyn DocumentConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with default converters (Markdown, content table).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MarkdownConverter::new()));
        registry.register(Arc::new(ContentTableConverter::new()));
        registry
    }

    /// Register a converter.
    ///
    /// The converter will be registered for all its supported extensions.
    pub fn register(&mut self, converter: Arc<dyn DocumentConverter>) {
        for ext in converter.supported_extensions() {
            self.converters
                .insert(ext.to_lowercase(), converter.clone());
        }
        self.by_name
            .insert(converter.name().to_lowercase(), converter);
    }

    /// Get a converter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.converters.get(&ext.to_lowercase()).cloned()
    }

    /// Get a converter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.converters.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.converters.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Find the converter for a path.
    pub fn converter_for(&self, path: &Path) -> Result<Arc<dyn DocumentConverter>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(format!("{} has no extension", path.display())))?;

        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
    }

    /// Load a document model using the appropriate converter.
    pub fn load(&self, path: &Path, options: &ConvertOptions) -> Result<Document> {
        self.converter_for(path)?.load(path, options)
    }

    /// Convert a file using the appropriate converter.
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let converter = self.converter_for(path)?;
        log::debug!("Converting {} with {}", path.display(), converter.name());
        converter.convert(path, options)
    }

    /// Convert bytes using the specified extension to determine the converter.
    pub fn convert_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        converter.convert_bytes(bytes, options)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
