//! Block-level types.

use super::TextRun;
use serde::{Deserialize, Serialize};

/// The classified role of a block, which selects its paragraph style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Top-level title
    Heading1,
    /// Section heading
    Heading2,
    /// Subsection heading
    Heading3,
    /// Bulleted or numbered list entry
    ListItem,
    /// Body text, possibly with bold runs
    Paragraph,
    /// Empty paragraph produced by a blank line
    BlankSpacer,
    /// Line inside a fenced code block
    Code,
}

impl BlockKind {
    /// Map a heading level (1-3) to its kind.
    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(BlockKind::Heading1),
            2 => Some(BlockKind::Heading2),
            3 => Some(BlockKind::Heading3),
            _ => None,
        }
    }

    /// Get the heading level (1-3) or None.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockKind::Heading1 => Some(1),
            BlockKind::Heading2 => Some(2),
            BlockKind::Heading3 => Some(3),
            _ => None,
        }
    }

    /// Check if this is a heading kind.
    pub fn is_heading(self) -> bool {
        self.heading_level().is_some()
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Information about a list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    /// Whether the item came from a numbered marker
    pub ordered: bool,

    /// Number parsed from the marker, if it fits in a `u32`
    pub number: Option<u32>,

    /// Marker digits as written, kept only when they overflow `number`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeral: Option<String>,

    /// Visible prefix written before the item text (e.g. "• ")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ListInfo {
    /// Create info for a bulleted item.
    pub fn bullet() -> Self {
        Self {
            ordered: false,
            number: None,
            numeral: None,
            label: None,
        }
    }

    /// Create info for a numbered item.
    pub fn numbered(number: Option<u32>) -> Self {
        Self {
            ordered: true,
            number,
            numeral: None,
            label: None,
        }
    }

    /// Create info for a numbered item from the digits of its marker.
    pub fn from_numeral(numeral: &str) -> Self {
        let number = numeral.parse().ok();
        let mut info = Self::numbered(number);
        if number.is_none() {
            info.numeral = Some(numeral.to_string());
        }
        info
    }

    /// Marker text without the trailing period ("3", or the verbatim digits).
    pub fn marker_numeral(&self) -> String {
        match (&self.numeral, self.number) {
            (Some(numeral), _) => numeral.clone(),
            (None, Some(number)) => number.to_string(),
            (None, None) => "1".to_string(),
        }
    }

    /// Set the visible label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A classified, styled unit of output content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block role
    pub kind: BlockKind,

    /// Text runs; empty for spacers
    #[serde(default)]
    pub runs: Vec<TextRun>,

    /// Paragraph alignment
    #[serde(default)]
    pub alignment: Alignment,

    /// Left indentation in list-indent steps (0 = none)
    #[serde(default)]
    pub indent_level: u8,

    /// List information for list items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListInfo>,
}

impl Block {
    fn with_kind(kind: BlockKind, runs: Vec<TextRun>) -> Self {
        Self {
            kind,
            runs,
            alignment: Alignment::Left,
            indent_level: 0,
            list: None,
        }
    }

    /// Create a heading block. Levels are clamped to 1-3 and level 1 is centered.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        let level = level.clamp(1, 3);
        let kind = BlockKind::heading(level).unwrap_or(BlockKind::Heading3);
        let mut block = Self::with_kind(kind, vec![TextRun::new(text)]);
        if level == 1 {
            block.alignment = Alignment::Center;
        }
        block
    }

    /// Create a list item with the standard indent.
    pub fn list_item(text: impl Into<String>, info: ListInfo) -> Self {
        let mut block = Self::with_kind(BlockKind::ListItem, vec![TextRun::new(text)]);
        block.indent_level = 1;
        block.list = Some(info);
        block
    }

    /// Create a bulleted list item.
    pub fn bullet_item(text: impl Into<String>) -> Self {
        Self::list_item(text, ListInfo::bullet())
    }

    /// Create a numbered list item.
    pub fn numbered_item(number: Option<u32>, text: impl Into<String>) -> Self {
        Self::list_item(text, ListInfo::numbered(number))
    }

    /// Create a plain paragraph with a single run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::Paragraph, vec![TextRun::new(text)])
    }

    /// Create a paragraph from pre-split runs.
    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self::with_kind(BlockKind::Paragraph, runs)
    }

    /// Create a blank spacer.
    pub fn spacer() -> Self {
        Self::with_kind(BlockKind::BlankSpacer, Vec::new())
    }

    /// Create a code line.
    pub fn code(text: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::Code, vec![TextRun::new(text)])
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the indent level.
    pub fn with_indent(mut self, level: u8) -> Self {
        self.indent_level = level;
        self
    }

    /// Get the block kind.
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Concatenated text of all runs, without list labels.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if any run is bold.
    pub fn has_bold(&self) -> bool {
        self.runs.iter().any(|r| r.bold)
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.kind.is_heading()
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.kind == BlockKind::ListItem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let h1 = Block::heading(1, "Title");
        assert_eq!(h1.kind(), BlockKind::Heading1);
        assert_eq!(h1.alignment, Alignment::Center);

        let h2 = Block::heading(2, "Sub");
        assert_eq!(h2.kind(), BlockKind::Heading2);
        assert_eq!(h2.alignment, Alignment::Left);

        // Out-of-range levels clamp
        assert_eq!(Block::heading(0, "x").kind(), BlockKind::Heading1);
        assert_eq!(Block::heading(6, "x").kind(), BlockKind::Heading3);
    }

    #[test]
    fn test_list_items_share_indent() {
        let bullet = Block::bullet_item("a");
        let numbered = Block::numbered_item(Some(2), "b");
        assert_eq!(bullet.indent_level, numbered.indent_level);
        assert!(bullet.is_list_item());
        assert_eq!(numbered.list.as_ref().and_then(|l| l.number), Some(2));
    }

    #[test]
    fn test_numeral_kept_on_overflow() {
        let info = ListInfo::from_numeral("42");
        assert_eq!(info.number, Some(42));
        assert_eq!(info.numeral, None);
        assert_eq!(info.marker_numeral(), "42");

        let info = ListInfo::from_numeral("99999999999");
        assert_eq!(info.number, None);
        assert_eq!(info.marker_numeral(), "99999999999");

        assert_eq!(ListInfo::numbered(None).marker_numeral(), "1");
    }

    #[test]
    fn test_spacer_has_no_text() {
        let spacer = Block::spacer();
        assert_eq!(spacer.kind(), BlockKind::BlankSpacer);
        assert!(spacer.runs.is_empty());
        assert_eq!(spacer.plain_text(), "");
    }

    #[test]
    fn test_plain_text_joins_runs() {
        let block = Block::from_runs(vec![
            TextRun::new("Hello "),
            TextRun::bold("world"),
        ]);
        assert_eq!(block.plain_text(), "Hello world");
        assert!(block.has_bold());
    }

    #[test]
    fn test_kind_heading_mapping() {
        assert_eq!(BlockKind::heading(2), Some(BlockKind::Heading2));
        assert_eq!(BlockKind::heading(4), None);
        assert_eq!(BlockKind::Heading3.heading_level(), Some(3));
        assert!(!BlockKind::Paragraph.is_heading());
    }
}
