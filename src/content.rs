//! Fixed-content documents described as data.
//!
//! A [`ContentTable`] is an ordered list of section records. It is turned
//! into the same [`Block`] sequence the Markdown translator produces, so
//! both sources share one renderer.
//!
//! ```
//! use mdocx::content::ContentTable;
//!
//! let table = ContentTable::from_json_str(r#"{
//!     "title": "Plan",
//!     "entries": [
//!         { "heading": { "level": 1, "text": "Plan" } },
//!         { "list": { "items": ["one", "two"], "marker": "numbered" } }
//!     ]
//! }"#).unwrap();
//! let doc = table.to_document();
//! assert_eq!(doc.len(), 3);
//! ```

use crate::error::{Error, Result};
use crate::model::{Alignment, Block, Document, ListInfo, Metadata};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bullet label used by [`ListMarker::Bullet`].
pub const BULLET_LABEL: &str = "\u{2022} ";

/// A document described as ordered section records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTable {
    /// Document title for the package properties
    #[serde(default)]
    pub title: Option<String>,

    /// Document author for the package properties
    #[serde(default)]
    pub author: Option<String>,

    /// Entries in output order
    pub entries: Vec<ContentEntry>,
}

/// One section record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentEntry {
    /// A heading; level 1 is centered
    Heading {
        /// Heading level (1-3)
        level: u8,
        /// Heading text
        text: String,
    },

    /// A body paragraph
    Paragraph {
        /// Paragraph text
        text: String,
        /// Alignment (left when omitted)
        #[serde(default)]
        align: Alignment,
    },

    /// A run of list items
    List {
        /// Item texts
        items: Vec<String>,
        /// Visible marker
        #[serde(default)]
        marker: ListMarker,
        /// Indent level (one list indent step when omitted)
        #[serde(default = "default_indent")]
        indent: u8,
    },

    /// An empty paragraph
    Spacer,
}

fn default_indent() -> u8 {
    1
}

/// Visible marker written before each list item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    /// No marker, indent only
    #[default]
    None,
    /// "• "
    Bullet,
    /// "1. ", "2. ", ...
    Numbered,
}

impl ContentTable {
    /// Load a content table from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: ContentTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a content table from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Reading content table {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of blocks this table expands to.
    pub fn block_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e {
                ContentEntry::List { items, .. } => items.len(),
                _ => 1,
            })
            .sum()
    }

    /// Expand the table into a document.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::with_metadata(Metadata {
            title: self.title.clone(),
            author: self.author.clone(),
            ..Default::default()
        });

        for entry in &self.entries {
            match entry {
                ContentEntry::Heading { level, text } => doc.push(Block::heading(*level, text)),
                ContentEntry::Paragraph { text, align } => {
                    doc.push(Block::paragraph(text).with_alignment(*align))
                }
                ContentEntry::List {
                    items,
                    marker,
                    indent,
                } => {
                    for (i, item) in items.iter().enumerate() {
                        let number = u32::try_from(i + 1).ok();
                        let info = match marker {
                            ListMarker::None => ListInfo::bullet(),
                            ListMarker::Bullet => ListInfo::bullet().with_label(BULLET_LABEL),
                            ListMarker::Numbered => {
                                let label = format!("{}. ", i + 1);
                                ListInfo::numbered(number).with_label(label)
                            }
                        };
                        doc.push(Block::list_item(item, info).with_indent(*indent));
                    }
                }
                ContentEntry::Spacer => doc.push(Block::spacer()),
            }
        }

        doc
    }

    fn validate(&self) -> Result<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            if let ContentEntry::Heading { level, .. } = entry {
                if !(1..=3).contains(level) {
                    return Err(Error::Content(format!(
                        "entry {}: heading level {} is outside 1-3",
                        i + 1,
                        level
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    fn sample() -> &'static str {
        r#"{
            "title": "Proposal",
            "entries": [
                { "heading": { "level": 1, "text": "Proposal" } },
                { "heading": { "level": 2, "text": "1. Overview" } },
                { "paragraph": { "text": "Intro." } },
                { "list": { "items": ["a", "b"] } },
                { "list": { "items": ["x"], "marker": "bullet", "indent": 2 } },
                { "list": { "items": ["first", "second"], "marker": "numbered" } },
                "spacer",
                { "paragraph": { "text": "Footer", "align": "center" } }
            ]
        }"#
    }

    #[test]
    fn test_parse_and_expand() {
        let table = ContentTable::from_json_str(sample()).unwrap();
        assert_eq!(table.block_count(), 10);

        let doc = table.to_document();
        assert_eq!(doc.len(), 10);
        assert_eq!(doc.metadata.title.as_deref(), Some("Proposal"));

        assert_eq!(doc.blocks[0], Block::heading(1, "Proposal"));
        assert_eq!(doc.blocks[1].kind(), BlockKind::Heading2);
        assert_eq!(doc.blocks[2], Block::paragraph("Intro."));
        assert_eq!(doc.blocks[8], Block::spacer());
        assert_eq!(doc.blocks[9].alignment, Alignment::Center);
    }

    #[test]
    fn test_list_markers_and_indent() {
        let doc = ContentTable::from_json_str(sample()).unwrap().to_document();

        let plain = &doc.blocks[3];
        assert_eq!(plain.indent_level, 1);
        assert_eq!(plain.list.as_ref().unwrap().label, None);

        let bullet = &doc.blocks[5];
        assert_eq!(bullet.indent_level, 2);
        assert_eq!(
            bullet.list.as_ref().unwrap().label.as_deref(),
            Some(BULLET_LABEL)
        );

        let second = &doc.blocks[7];
        let info = second.list.as_ref().unwrap();
        assert!(info.ordered);
        assert_eq!(info.number, Some(2));
        assert_eq!(info.label.as_deref(), Some("2. "));
        assert_eq!(second.plain_text(), "second");
    }

    #[test]
    fn test_rejects_bad_heading_level() {
        let json = r#"{ "entries": [ { "heading": { "level": 4, "text": "x" } } ] }"#;
        assert!(matches!(
            ContentTable::from_json_str(json),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ContentTable::from_json_str("{ \"entries\": [ { \"table\": {} } ] }").is_err());
        assert!(ContentTable::from_json_str("not json").is_err());
    }

    #[test]
    fn test_empty_table() {
        let table = ContentTable::from_json_str(r#"{ "entries": [] }"#).unwrap();
        assert!(table.to_document().is_empty());
    }
}
