//! Line-oriented Markdown translator.

use std::io::Read;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use super::line::{classify, has_unbalanced_emphasis, split_emphasis, LineKind, FENCE};
use super::{FenceMode, ParseOptions};
use crate::detect::decode_text;
use crate::error::Result;
use crate::model::{Block, Document, ListInfo};

/// Translates Markdown-like text into a [`Document`].
///
/// Input is split on `'\n'`; each line yields at most one block, in input
/// order. The translator never rejects input: anything that matches no
/// specific rule becomes a plain paragraph.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    options: ParseOptions,
}

impl MarkdownParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Translate a string.
    pub fn parse_str(&self, text: &str) -> Document {
        let mut doc = Document::new();
        doc.extend(self.blocks(text.split('\n')));
        log::debug!("Translated {} blocks", doc.len());
        doc
    }

    /// Translate UTF-8 bytes. A leading byte-order mark is ignored.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<Document> {
        let text = decode_text(data)?;
        Ok(self.parse_str(text))
    }

    /// Translate the contents of a reader.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Document> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse_bytes(&data)
    }

    /// Translate a file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        log::info!("Reading {}", path.display());
        let data = std::fs::read(path)?;
        self.parse_bytes(&data)
    }

    /// Lazily translate a sequence of lines.
    pub fn blocks<I, S>(&self, lines: I) -> Blocks<'_, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Blocks {
            lines: lines.into_iter(),
            translator: LineTranslator::new(&self.options),
        }
    }
}

/// Per-line translation state.
///
/// In [`FenceMode::SkipDelimiters`] the translator carries no state between
/// lines. In [`FenceMode::CodeBlocks`] it remembers whether a fence is open.
#[derive(Debug)]
pub struct LineTranslator<'a> {
    options: &'a ParseOptions,
    in_fence: bool,
    line_number: usize,
}

impl<'a> LineTranslator<'a> {
    /// Create a translator at the start of input.
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            in_fence: false,
            line_number: 0,
        }
    }

    /// Check whether a fenced region is currently open.
    pub fn in_fence(&self) -> bool {
        self.in_fence
    }

    /// Translate one raw line. Returns None for skipped lines.
    pub fn translate(&mut self, raw: &str) -> Option<Block> {
        self.line_number += 1;

        let normalized: String;
        let raw = if self.options.normalize_unicode {
            normalized = raw.nfc().collect();
            normalized.as_str()
        } else {
            raw
        };

        if self.in_fence {
            if raw.trim().starts_with(FENCE) {
                log::debug!("line {}: closing code fence", self.line_number);
                self.in_fence = false;
                return None;
            }
            return Some(Block::code(raw.trim_end_matches('\r')));
        }

        match classify(raw) {
            LineKind::Blank => Some(Block::spacer()),
            LineKind::Heading { level, text } => Some(Block::heading(level, text)),
            LineKind::FenceDelimiter => {
                if self.options.fence_mode == FenceMode::CodeBlocks {
                    self.in_fence = true;
                }
                log::debug!("line {}: skipping code fence delimiter", self.line_number);
                None
            }
            LineKind::Bullet(text) => Some(Block::bullet_item(text)),
            LineKind::Numbered { numeral, text } => {
                Some(Block::list_item(text, ListInfo::from_numeral(numeral)))
            }
            LineKind::Emphasis(line) => {
                if has_unbalanced_emphasis(line) {
                    log::debug!(
                        "line {}: unbalanced bold delimiter, trailing text is bold",
                        self.line_number
                    );
                }
                let runs = split_emphasis(line, self.options.skip_empty_emphasis);
                Some(Block::from_runs(runs))
            }
            LineKind::Plain(line) => Some(Block::paragraph(line)),
        }
    }
}

/// Iterator over the blocks translated from a sequence of lines.
#[derive(Debug)]
pub struct Blocks<'a, I> {
    lines: I,
    translator: LineTranslator<'a>,
}

impl<I, S> Iterator for Blocks<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        loop {
            let line = self.lines.next()?;
            if let Some(block) = self.translator.translate(line.as_ref()) {
                return Some(block);
            }
        }
    }
}
