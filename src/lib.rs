//! # mdocx
//!
//! Markdown-like text to Word (`.docx`) translation for Rust.
//!
//! This library reads a lightweight Markdown dialect line by line, turns each
//! line into a styled block, and writes the blocks as an OOXML word
//! processing package. Fixed documents can also be described as JSON content
//! tables and rendered through the same path.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdocx::{parse_file, render};
//!
//! fn main() -> mdocx::Result<()> {
//!     // Translate a Markdown file
//!     let doc = parse_file("notes.md")?;
//!
//!     // Write it as a Word document
//!     let options = render::RenderOptions::default();
//!     render::save_docx(&doc, &options, "notes.docx")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line translator**: headings, bullet and numbered items, `**bold**` spans
//! - **Content tables**: fixed documents described as data
//! - **Configurable styles**: JSON style sheets with sizes, fonts and spacing
//! - **Inspection outputs**: normalized Markdown, plain text, JSON

pub mod content;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use content::{ContentEntry, ContentTable, ListMarker};
pub use convert::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, OutputFormat,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use model::{Alignment, Block, BlockKind, Document, ListInfo, Metadata, TextRun};
pub use parser::{classify, FenceMode, LineKind, MarkdownParser, ParseOptions};
pub use render::{JsonFormat, PageSize, RenderOptions, RenderStats};
pub use style::{StyleDef, StyleSheet};

use std::io::Read;
use std::path::Path;

/// Translate Markdown-like text into a document.
///
/// Translation never fails: lines that match no rule become plain paragraphs.
///
/// # Example
///
/// ```
/// use mdocx::{parse_str, BlockKind};
///
/// let doc = parse_str("# Title\n\nSome text\n- a\n- b");
/// assert_eq!(doc.len(), 5);
/// assert_eq!(doc.blocks[0].kind(), BlockKind::Heading1);
/// ```
pub fn parse_str(text: &str) -> Document {
    MarkdownParser::default().parse_str(text)
}

/// Translate Markdown-like text with custom options.
///
/// # Example
///
/// ```
/// use mdocx::{parse_str_with_options, BlockKind, ParseOptions};
///
/// let options = ParseOptions::new().fenced_code_blocks();
/// let doc = parse_str_with_options("```\nlet x = 1;\n```", options);
/// assert_eq!(doc.count(BlockKind::Code), 1);
/// ```
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Document {
    MarkdownParser::new(options).parse_str(text)
}

/// Translate a Markdown-like file.
///
/// # Arguments
///
/// * `path` - Path to the text file
///
/// # Example
///
/// ```no_run
/// use mdocx::parse_file;
///
/// let doc = parse_file("notes.md").unwrap();
/// println!("Blocks: {}", doc.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    MarkdownParser::default().parse_file(path)
}

/// Translate a Markdown-like file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    MarkdownParser::new(options).parse_file(path)
}

/// Translate UTF-8 bytes. A leading byte order mark is ignored.
///
/// # Example
///
/// ```
/// use mdocx::parse_bytes;
///
/// let doc = parse_bytes(b"\xEF\xBB\xBF# Title").unwrap();
/// assert_eq!(doc.title().as_deref(), Some("Title"));
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    MarkdownParser::default().parse_bytes(data)
}

/// Translate UTF-8 bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    MarkdownParser::new(options).parse_bytes(data)
}

/// Translate text read from a reader.
///
/// # Example
///
/// ```no_run
/// use mdocx::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("notes.md").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    MarkdownParser::default().parse_reader(reader)
}

/// Translate text read from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    MarkdownParser::new(options).parse_reader(reader)
}

/// Build a document from a JSON content table file.
///
/// # Example
///
/// ```no_run
/// use mdocx::build_file;
///
/// let doc = build_file("demos/proposal.json").unwrap();
/// mdocx::render::save_docx(&doc, &Default::default(), "proposal.docx").unwrap();
/// ```
pub fn build_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    Ok(ContentTable::from_file(path)?.to_document())
}

/// Translate a Markdown-like file and write it as a Word document.
///
/// # Arguments
///
/// * `input` - Path to the text file
/// * `output` - Path of the `.docx` file to create (overwritten if present)
///
/// # Example
///
/// ```no_run
/// use mdocx::convert_file;
///
/// convert_file("notes.md", "notes.docx").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let doc = parse_file(input)?;
    render::save_docx(&doc, &RenderOptions::default(), output)
}

/// Translate a Markdown-like file into Word document bytes.
pub fn to_docx<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<Vec<u8>> {
    let doc = parse_file(path)?;
    render::to_docx(&doc, options)
}

/// Extract plain text from a Markdown-like file.
///
/// # Example
///
/// ```no_run
/// use mdocx::extract_text;
///
/// let text = extract_text("notes.md").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc)
}

/// Translate a file and dump the block model as JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for translating and rendering documents.
///
/// # Example
///
/// ```no_run
/// use mdocx::{Mdocx, PageSize};
///
/// Mdocx::new()
///     .fenced_code()
///     .with_page_size(PageSize::A4)
///     .with_title("Notes")
///     .parse("notes.md")?
///     .save_docx("notes.docx")?;
/// # Ok::<(), mdocx::Error>(())
/// ```
pub struct Mdocx {
    parse_options: ParseOptions,
    render_options: RenderOptions,
    title: Option<String>,
}

impl Mdocx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            title: None,
        }
    }

    /// Emit fenced lines as code blocks instead of plain paragraphs.
    pub fn fenced_code(mut self) -> Self {
        self.parse_options = self.parse_options.fenced_code_blocks();
        self
    }

    /// Drop empty bold runs such as the one in `a****b`.
    pub fn skip_empty_bold(mut self) -> Self {
        self.parse_options = self.parse_options.with_skip_empty_emphasis(true);
        self
    }

    /// NFC-normalize input text.
    pub fn normalize_unicode(mut self) -> Self {
        self.parse_options = self.parse_options.with_unicode_normalization(true);
        self
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.render_options = self.render_options.with_styles(styles);
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.render_options = self.render_options.with_page_size(size);
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Translate a file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<MdocxResult> {
        let document = MarkdownParser::new(self.parse_options.clone()).parse_file(path)?;
        Ok(self.finish(document))
    }

    /// Translate text.
    pub fn parse_str(self, text: &str) -> MdocxResult {
        let document = MarkdownParser::new(self.parse_options.clone()).parse_str(text);
        self.finish(document)
    }

    /// Build from a content table.
    pub fn build(self, table: &ContentTable) -> MdocxResult {
        self.finish(table.to_document())
    }

    fn finish(self, mut document: Document) -> MdocxResult {
        if let Some(title) = self.title {
            document.metadata.title = Some(title);
        }
        MdocxResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Mdocx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of translating a document.
pub struct MdocxResult {
    /// The translated document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl MdocxResult {
    /// Render as Word document bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document, &self.render_options)
    }

    /// Write a Word document to a file.
    pub fn save_docx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::save_docx(&self.document, &self.render_options, path)
    }

    /// Convert to normalized Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Block statistics.
    pub fn stats(&self) -> RenderStats {
        RenderStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
