//! Rendering result with metadata and statistics.

use crate::model::{BlockKind, Document, Metadata};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered content (DOCX bytes, or UTF-8 text)
    pub content: Vec<u8>,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Block statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: Vec<u8>, metadata: Metadata, stats: RenderStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics about the blocks in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of blocks
    pub block_count: u32,

    /// Number of headings (all levels)
    pub heading_count: u32,

    /// Number of body paragraphs
    pub paragraph_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of blank spacers
    pub spacer_count: u32,

    /// Number of code lines
    pub code_line_count: u32,

    /// Number of bold runs
    pub bold_run_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a whole document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in doc {
            stats.block_count += 1;
            match block.kind() {
                BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 => {
                    stats.heading_count += 1
                }
                BlockKind::Paragraph => stats.paragraph_count += 1,
                BlockKind::ListItem => stats.list_item_count += 1,
                BlockKind::BlankSpacer => stats.spacer_count += 1,
                BlockKind::Code => stats.code_line_count += 1,
            }
            stats.bold_run_count += block.runs.iter().filter(|r| r.bold).count() as u32;
            for run in &block.runs {
                stats.count_text(&run.text);
            }
        }
        stats
    }

    /// Add words and characters from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, TextRun};

    #[test]
    fn test_stats_from_document() {
        let mut doc = Document::new();
        doc.push(Block::heading(1, "Title here"));
        doc.push(Block::spacer());
        doc.push(Block::from_runs(vec![
            TextRun::new("Hello "),
            TextRun::bold("world"),
        ]));
        doc.push(Block::bullet_item("one"));
        doc.push(Block::numbered_item(Some(1), "two"));
        doc.push(Block::code("x"));

        let stats = RenderStats::from_document(&doc);
        assert_eq!(stats.block_count, 6);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.list_item_count, 2);
        assert_eq!(stats.spacer_count, 1);
        assert_eq!(stats.code_line_count, 1);
        assert_eq!(stats.bold_run_count, 1);
        assert_eq!(stats.word_count, 7);
        assert_eq!(stats.char_count, 26);
    }

    #[test]
    fn test_render_result_len() {
        let result = RenderResult::new(vec![1, 2, 3], Metadata::default(), RenderStats::new());
        assert_eq!(result.content_len(), 3);
    }
}
