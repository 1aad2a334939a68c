//! Plain text rendering.

use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text, one line per block.
///
/// List labels are kept; bold markers are not.
pub fn to_text(doc: &Document) -> Result<String> {
    let lines: Vec<String> = doc
        .iter()
        .map(|block| {
            let label = block
                .list
                .as_ref()
                .and_then(|l| l.label.as_deref())
                .unwrap_or("");
            format!("{}{}", label, block.plain_text())
        })
        .collect();

    Ok(lines.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, ListInfo, TextRun};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.push(Block::heading(1, "Title"));
        doc.push(Block::from_runs(vec![
            TextRun::new("Hello, "),
            TextRun::bold("world"),
        ]));
        doc.push(Block::list_item("x", ListInfo::bullet().with_label("\u{2022} ")));
        doc.push(Block::spacer());

        let result = to_text(&doc).unwrap();
        assert_eq!(result, "Title\nHello, world\n\u{2022} x");
    }
}
