//! JSON content table converter.

use super::{ConvertOptions, DocumentConverter};
use crate::content::ContentTable;
use crate::detect::decode_text;
use crate::error::Result;
use crate::model::Document;

/// Converter for content tables stored as JSON.
///
/// The table's own title and author are kept unless the options override them.
#[derive(Debug, Default)]
pub struct ContentTableConverter;

impl ContentTableConverter {
    /// Create a new content table converter.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for ContentTableConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "Content-Table"
    }

    fn load_bytes(&self, bytes: &[u8], _options: &ConvertOptions) -> Result<Document> {
        let table = ContentTable::from_json_str(decode_text(bytes)?)?;
        log::debug!("Content table holds {} blocks", table.block_count());
        Ok(table.to_document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::OutputFormat;
    use crate::error::Error;
    use crate::model::BlockKind;

    const TABLE: &str = r#"{
        "title": "Plan",
        "entries": [
            {"heading": {"level": 1, "text": "Plan"}},
            {"list": {"items": ["one", "two"], "marker": "numbered"}},
            "spacer"
        ]
    }"#;

    #[test]
    fn test_load_table() {
        let converter = ContentTableConverter::new();
        let doc = converter
            .load_bytes(TABLE.as_bytes(), &ConvertOptions::default())
            .unwrap();
        assert_eq!(doc.metadata.title.as_deref(), Some("Plan"));
        assert_eq!(doc.count(BlockKind::ListItem), 2);
        assert_eq!(doc.count(BlockKind::BlankSpacer), 1);
    }

    #[test]
    fn test_title_override() {
        let converter = ContentTableConverter::new();
        let options = ConvertOptions::new()
            .with_title("Other")
            .with_format(OutputFormat::Markdown);
        let result = converter.convert_bytes(TABLE.as_bytes(), &options).unwrap();
        assert_eq!(result.metadata.title.as_deref(), Some("Other"));
        assert_eq!(result.as_text(), Some("# Plan\n1. one\n2. two\n"));
    }

    #[test]
    fn test_malformed_table() {
        let converter = ContentTableConverter::new();
        let err = converter
            .load_bytes(b"{\"entries\": 3}", &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }
}
