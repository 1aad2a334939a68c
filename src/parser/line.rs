//! Single-line classification.
//!
//! [`classify`] is a pure function: the result depends only on the line
//! itself. Rules are tried in priority order and the first match wins.

use crate::model::TextRun;
use regex::Regex;
use std::sync::OnceLock;

/// Fenced-code delimiter.
pub const FENCE: &str = "```";

/// Bold emphasis delimiter.
pub const EMPHASIS: &str = "**";

/// The classification of one trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only
    Blank,
    /// `# `, `## ` or `### ` heading
    Heading {
        /// Heading level (1-3)
        level: u8,
        /// Text after the marker
        text: &'a str,
    },
    /// Line starting with three backticks
    FenceDelimiter,
    /// `- ` or `* ` item
    Bullet(&'a str),
    /// `N. ` item
    Numbered {
        /// Digits of the marker
        numeral: &'a str,
        /// Text after the marker
        text: &'a str,
    },
    /// Line containing `**`
    Emphasis(&'a str),
    /// Anything else
    Plain(&'a str),
}

fn numbered_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\. ").unwrap())
}

/// Classify a line. Leading and trailing whitespace is ignored.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }

    for (level, marker) in [(1, "# "), (2, "## "), (3, "### ")] {
        if let Some(text) = line.strip_prefix(marker) {
            return LineKind::Heading { level, text };
        }
    }

    if line.starts_with(FENCE) {
        return LineKind::FenceDelimiter;
    }

    if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return LineKind::Bullet(text);
    }

    if let Some(m) = numbered_marker().find(line) {
        // The match ends with ". ", both single-byte.
        return LineKind::Numbered {
            numeral: &line[..m.end() - 2],
            text: &line[m.end()..],
        };
    }

    if line.contains(EMPHASIS) {
        return LineKind::Emphasis(line);
    }

    LineKind::Plain(line)
}

/// Split a line on `**` into alternating plain and bold runs.
///
/// Segments at even positions are plain and are dropped when empty.
/// Segments at odd positions are bold and are kept even when empty unless
/// `skip_empty_bold` is set.
pub fn split_emphasis(line: &str, skip_empty_bold: bool) -> Vec<TextRun> {
    line.split(EMPHASIS)
        .enumerate()
        .filter_map(|(i, part)| {
            if i % 2 == 0 {
                (!part.is_empty()).then(|| TextRun::new(part))
            } else if part.is_empty() && skip_empty_bold {
                None
            } else {
                Some(TextRun::bold(part))
            }
        })
        .collect()
}

/// Check whether a line has an odd number of `**` delimiters.
pub fn has_unbalanced_emphasis(line: &str) -> bool {
    line.matches(EMPHASIS).count() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t "), LineKind::Blank);
        assert_eq!(classify("\r"), LineKind::Blank);
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            classify("# Title"),
            LineKind::Heading { level: 1, text: "Title" }
        );
        assert_eq!(
            classify("## Sub"),
            LineKind::Heading { level: 2, text: "Sub" }
        );
        assert_eq!(classify("### X"), LineKind::Heading { level: 3, text: "X" });
        // Four hashes are not a heading and fall through to plain text.
        assert_eq!(classify("#### Deep"), LineKind::Plain("#### Deep"));
        // Marker without the space is not a heading.
        assert_eq!(classify("#Title"), LineKind::Plain("#Title"));
    }

    #[test]
    fn test_heading_keeps_emphasis_markers() {
        assert_eq!(
            classify("## **Bold** heading"),
            LineKind::Heading {
                level: 2,
                text: "**Bold** heading"
            }
        );
    }

    #[test]
    fn test_indented_heading_is_trimmed() {
        assert_eq!(
            classify("   # Title  "),
            LineKind::Heading { level: 1, text: "Title" }
        );
    }

    #[test]
    fn test_fence() {
        assert_eq!(classify("```"), LineKind::FenceDelimiter);
        assert_eq!(classify("```rust"), LineKind::FenceDelimiter);
        assert_eq!(classify("``not a fence"), LineKind::Plain("``not a fence"));
    }

    #[test]
    fn test_bullets() {
        assert_eq!(classify("- item"), LineKind::Bullet("item"));
        assert_eq!(classify("* item"), LineKind::Bullet("item"));
        // Bullet wins over emphasis.
        assert_eq!(classify("- **bold**"), LineKind::Bullet("**bold**"));
        // No space after the marker.
        assert_eq!(classify("-item"), LineKind::Plain("-item"));
    }

    #[test]
    fn test_emphasis_line_starting_with_double_star() {
        // "**x**" does not start with "* ", so it is an emphasis line.
        assert_eq!(classify("**x** y"), LineKind::Emphasis("**x** y"));
    }

    #[test]
    fn test_numbered() {
        assert_eq!(
            classify("2. Second"),
            LineKind::Numbered {
                numeral: "2",
                text: "Second"
            }
        );
        assert_eq!(
            classify("10. Tenth"),
            LineKind::Numbered {
                numeral: "10",
                text: "Tenth"
            }
        );
        // Only the first numeral prefix is stripped.
        assert_eq!(
            classify("1. 2. nested"),
            LineKind::Numbered {
                numeral: "1",
                text: "2. nested"
            }
        );
        assert_eq!(classify("1.5 ratio"), LineKind::Plain("1.5 ratio"));
    }

    #[test]
    fn test_numbered_overflow_keeps_text() {
        assert_eq!(
            classify("99999999999. big"),
            LineKind::Numbered {
                numeral: "99999999999",
                text: "big"
            }
        );
    }

    #[test]
    fn test_plain() {
        assert_eq!(classify("  Some text  "), LineKind::Plain("Some text"));
    }

    #[test]
    fn test_split_emphasis_basic() {
        let runs = split_emphasis("Hello **world** end", false);
        assert_eq!(
            runs,
            vec![
                TextRun::new("Hello "),
                TextRun::bold("world"),
                TextRun::new(" end"),
            ]
        );
    }

    #[test]
    fn test_split_emphasis_leading_marker() {
        let runs = split_emphasis("**Note:** read this", false);
        assert_eq!(runs, vec![TextRun::bold("Note:"), TextRun::new(" read this")]);
    }

    #[test]
    fn test_split_emphasis_empty_bold() {
        assert_eq!(
            split_emphasis("a****b", false),
            vec![TextRun::new("a"), TextRun::bold(""), TextRun::new("b")]
        );
        assert_eq!(
            split_emphasis("a****b", true),
            vec![TextRun::new("a"), TextRun::new("b")]
        );
    }

    #[test]
    fn test_split_emphasis_unbalanced() {
        assert!(has_unbalanced_emphasis("start **rest"));
        assert!(!has_unbalanced_emphasis("a **b** c"));
        let runs = split_emphasis("start **rest", false);
        assert_eq!(runs, vec![TextRun::new("start "), TextRun::bold("rest")]);
    }
}
