//! Normalized Markdown rendering.
//!
//! Writes one line per block using the same markers the translator reads,
//! so the output shows how a source was understood.

use crate::error::Result;
use crate::model::{Block, BlockKind, Document, ListInfo, TextRun};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut lines: Vec<String> = Vec::with_capacity(doc.len() + 2);

        if self.options.include_frontmatter {
            lines.push(doc.metadata.to_yaml_frontmatter());
        }

        let mut in_code = false;
        for block in doc {
            let is_code = block.kind() == BlockKind::Code;
            if is_code != in_code {
                lines.push("```".to_string());
                in_code = is_code;
            }
            lines.push(self.render_block(block));
        }
        if in_code {
            lines.push("```".to_string());
        }

        Ok(lines.join("\n"))
    }

    fn render_block(&self, block: &Block) -> String {
        match block.kind() {
            BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 => {
                let level = block.kind().heading_level().unwrap_or(1);
                format!("{} {}", "#".repeat(level as usize), render_runs(&block.runs))
            }
            BlockKind::ListItem => {
                let indent = "  ".repeat(block.indent_level.saturating_sub(1) as usize);
                let text = render_runs(&block.runs);
                match block.list {
                    // Visible labels are written as they appear in the document
                    Some(ListInfo {
                        label: Some(ref label),
                        ..
                    }) => format!("{}{}{}", indent, label, text),
                    Some(ref info) if info.ordered => {
                        format!("{}{}. {}", indent, info.marker_numeral(), text)
                    }
                    _ => format!("{}{} {}", indent, self.options.list_marker, text),
                }
            }
            BlockKind::Paragraph => render_runs(&block.runs),
            BlockKind::BlankSpacer => String::new(),
            BlockKind::Code => block.plain_text(),
        }
    }
}

fn render_runs(runs: &[TextRun]) -> String {
    runs.iter()
        .map(|run| {
            if run.bold {
                format!("**{}**", run.text)
            } else {
                run.text.clone()
            }
        })
        .collect()
}
