//! Integration tests for the converter module.

use std::path::Path;
use std::sync::Arc;
use mdocx::convert::{
    ContentTableConverter, ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter,
    MarkdownConverter, OutputFormat,
};
use mdocx::error::{Error, Result};
use mdocx::model::{Block, Document};

/// Mock converter for testing.
struct MockConverter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockConverter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DocumentConverter for MockConverter {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn load_bytes(&self, _bytes: &[u8], _options: &ConvertOptions) -> Result<Document> {
        let mut doc = Document::new();
        doc.push(Block::paragraph(format!("Converted by {}", self.name)));
        Ok(doc)
    }
}

#[test]
fn test_convert_options_builder() {
    let options = ConvertOptions::new()
        .with_author("Ops team")
        .with_stats(true)
        .with_format(OutputFormat::Text);

    assert_eq!(options.author, Some("Ops team".to_string()));
    assert!(options.collect_stats);
    assert_eq!(options.output_format, OutputFormat::Text);
}

#[test]
fn test_converter_registry_new() {
    let registry = ConverterRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("md"));
    assert!(!registry.supports("json"));
}

#[test]
fn test_converter_registry_with_defaults() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry.supports("md"));
    assert!(registry.supports("MD")); // Case insensitive
    assert!(registry.supports("txt"));
    assert!(registry.supports("json"));
    assert!(!registry.supports("docx"));
}

#[test]
fn test_converter_registry_register() {
    let mut registry = ConverterRegistry::new();
    let converter = Arc::new(MockConverter::new(vec!["rst", "rest"], "rst"));

    registry.register(converter);

    assert!(registry.supports("rst"));
    assert!(registry.supports("rest"));
    assert!(registry.supports("RST")); // Case insensitive
}

#[test]
fn test_converter_registry_get_by_extension() {
    let registry = ConverterRegistry::with_defaults();

    let converter = registry.get_by_extension("markdown");
    assert!(converter.is_some());
    assert_eq!(converter.unwrap().name(), "Markdown");

    let converter = registry.get_by_extension("json");
    assert_eq!(converter.unwrap().name(), "Content-Table");

    let converter = registry.get_by_extension("docx");
    assert!(converter.is_none());
}

#[test]
fn test_converter_registry_multiple_converters() {
    let mut registry = ConverterRegistry::new();

    registry.register(Arc::new(MarkdownConverter::new()));
    registry.register(Arc::new(MockConverter::new(vec!["org"], "org")));
    registry.register(Arc::new(MockConverter::new(vec!["adoc", "asciidoc"], "asciidoc")));

    assert!(registry.supports("md"));
    assert!(registry.supports("org"));
    assert!(registry.supports("adoc"));
    assert!(!registry.supports("json"));

    let converter = registry.get_by_name("asciidoc");
    assert!(converter.is_some());
    assert!(converter.unwrap().supports_extension("asciidoc"));
}

#[test]
fn test_content_table_converter_extensions() {
    let converter = ContentTableConverter::new();

    assert_eq!(converter.supported_extensions(), &["json"]);
    assert!(converter.supports_extension("JSON"));
    assert!(!converter.supports_extension("md"));
}

#[test]
fn test_convert_result_methods() {
    let result = ConvertResult::new(b"# Hello".to_vec(), Default::default())
        .with_mime_type("text/markdown");

    assert_eq!(result.content_len(), 7);
    assert!(result.stats.is_none());
    assert_eq!(result.as_text(), Some("# Hello"));
}

#[test]
fn test_convert_result_with_stats() {
    use mdocx::render::RenderStats;

    let stats = RenderStats {
        block_count: 5,
        paragraph_count: 2,
        ..Default::default()
    };

    let result = ConvertResult::new(Vec::new(), Default::default()).with_stats(stats);

    let stats = result.stats.unwrap();
    assert_eq!(stats.block_count, 5);
    assert_eq!(stats.paragraph_count, 2);
}

#[test]
fn test_output_format_default() {
    let format = OutputFormat::default();
    assert_eq!(format, OutputFormat::Docx);
    assert_eq!(
        format.mime_type(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
}

#[test]
fn test_mock_converter() {
    let converter = MockConverter::new(vec!["mock"], "mock-converter");

    let result = converter
        .convert_bytes(b"", &ConvertOptions::new().with_format(OutputFormat::Text))
        .unwrap();
    assert_eq!(result.as_text(), Some("Converted by mock-converter"));
}

#[test]
fn test_registry_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.md");
    std::fs::write(&input, "# Notes\n- one\n- two").unwrap();

    let registry = ConverterRegistry::with_defaults();
    let options = ConvertOptions::new()
        .with_format(OutputFormat::Markdown)
        .with_stats(true);
    let result = registry.convert(&input, &options).unwrap();

    assert_eq!(result.as_text(), Some("# Notes\n- one\n- two"));
    assert_eq!(result.stats.unwrap().list_item_count, 2);
}

#[test]
fn test_registry_convert_no_extension_error() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry.convert(Path::new("noextension"), &ConvertOptions::default());
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_registry_convert_unsupported_extension_error() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry.convert(Path::new("test.xyz"), &ConvertOptions::default());
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_registry_convert_missing_file() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry.convert(Path::new("does/not/exist.md"), &ConvertOptions::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_registry_convert_bytes_unsupported() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry.convert_bytes(b"test", "xyz", &ConvertOptions::default());
    assert!(result.is_err());
}
