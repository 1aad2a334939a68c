//! DOCX (Office Open XML) rendering.
//!
//! Blocks are mapped onto the `docx-rs` document model: one [`Paragraph`]
//! per block, one registered [`Style`] per style sheet entry. `docx-rs`
//! serializes the parts and packs the zip container.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use chrono::SecondsFormat;
use docx_rs::{
    AlignmentType, Docx, LineSpacing, PageMargin, Paragraph, Run, RunFonts, Style, StyleType,
};

use super::{RenderOptions, RenderResult, RenderStats};
use crate::error::{Error, Result};
use crate::model::{Alignment, Block, Document, Metadata, TextRun};
use crate::style::{StyleDef, DEFAULT_STYLE_ID};

/// MIME type of a Word document.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Base font for text that has no style font.
const DEFAULT_FONT: &str = "Calibri";
/// Base font size in half-points (11pt).
const DEFAULT_SIZE: usize = 22;
/// Page margin in twips (1 inch).
const PAGE_MARGIN: i32 = 1440;
/// Header and footer distance in twips.
const HEADER_FOOTER_MARGIN: i32 = 720;

/// Package parts every written document contains.
pub const PART_NAMES: [&str; 7] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "docProps/core.xml",
    "docProps/app.xml",
    "word/_rels/document.xml.rels",
    "word/styles.xml",
    "word/document.xml",
];

/// Render a document to DOCX bytes.
pub fn to_docx(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let writer = DocxWriter::new(options.clone());
    let cursor = writer.write(doc, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Render a document to DOCX bytes with block statistics.
pub fn to_docx_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let content = to_docx(doc, options)?;
    let stats = RenderStats::from_document(doc);
    Ok(RenderResult::new(content, doc.metadata.clone(), stats))
}

/// Render a document and save it as a `.docx` file.
///
/// The package is assembled in memory first, so a packing failure never
/// leaves a truncated file behind.
pub fn save_docx<P: AsRef<Path>>(doc: &Document, options: &RenderOptions, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_docx(doc, options)?;
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(&bytes)?;
    out.flush()?;
    log::info!("Wrote {} blocks to {}", doc.len(), path.display());
    Ok(())
}

/// DOCX package writer.
pub struct DocxWriter {
    options: RenderOptions,
}

impl DocxWriter {
    /// Create a new DOCX writer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Write the package for `doc` into `writer` and return the writer.
    pub fn write<W: Write + Seek>(&self, doc: &Document, mut writer: W) -> Result<W> {
        self.build(doc)
            .build()
            .pack(&mut writer)
            .map_err(|e| Error::Package(e.to_string()))?;
        Ok(writer)
    }

    /// Build the `docx-rs` model of `doc`: page setup, styles, properties
    /// and one paragraph per block.
    pub fn build(&self, doc: &Document) -> Docx {
        let (width, height) = self.options.page_size.twips();
        let mut docx = Docx::new()
            .page_size(width, height)
            .page_margin(
                PageMargin::new()
                    .top(PAGE_MARGIN)
                    .right(PAGE_MARGIN)
                    .bottom(PAGE_MARGIN)
                    .left(PAGE_MARGIN)
                    .header(HEADER_FOOTER_MARGIN)
                    .footer(HEADER_FOOTER_MARGIN),
            )
            .default_fonts(fonts(DEFAULT_FONT))
            .default_size(DEFAULT_SIZE);

        let sheet = &self.options.styles;
        let next = sheet.normal.style_id();
        for def in sheet.styles() {
            log::debug!("Registering style {} ({})", def.style_id(), def.name);
            docx = docx.add_style(style(def, &next));
        }

        docx = properties(docx, &doc.metadata, doc.title());

        for block in doc {
            docx = docx.add_paragraph(self.paragraph(block));
        }
        docx
    }

    fn paragraph(&self, block: &Block) -> Paragraph {
        let styles = &self.options.styles;
        let style = styles.for_kind(block.kind());

        let mut para = Paragraph::new().style(&style.style_id());
        if block.indent_level > 0 {
            let left = styles.indent_twips(block.indent_level);
            para = para.indent(Some(left as i32), None, None, None);
        }
        if let Some(align) = alignment(block.alignment) {
            para = para.align(align);
        }

        if let Some(label) = block.list.as_ref().and_then(|l| l.label.as_deref()) {
            para = para.add_run(run(&TextRun::new(label)));
        }
        for text in &block.runs {
            para = para.add_run(run(text));
        }
        para
    }
}

fn style(def: &StyleDef, next: &str) -> Style {
    let mut style = Style::new(def.style_id(), StyleType::Paragraph)
        .name(def.name.as_str())
        .based_on(DEFAULT_STYLE_ID)
        .next(next)
        .size(def.half_points() as usize)
        .line_spacing(LineSpacing::new().after(def.space_after_twips()));
    if def.bold {
        style = style.bold();
    }
    if let Some(ref font) = def.font {
        style = style.fonts(fonts(font));
    }
    if let Some(level) = def.outline_level {
        style = style.outline_lvl(usize::from(level));
    }
    style
}

fn fonts(name: &str) -> RunFonts {
    RunFonts::new()
        .ascii(name)
        .hi_ansi(name)
        .east_asia(name)
        .cs(name)
}

/// Build a run. Tabs become tab elements; spaces are preserved.
fn run(text: &TextRun) -> Run {
    let clean = strip_invalid_chars(&text.text);
    let mut run = Run::new();
    for (i, segment) in clean.split('\t').enumerate() {
        if i > 0 {
            run = run.add_tab();
        }
        if !segment.is_empty() || i == 0 {
            run = run.add_text(segment);
        }
    }
    if text.bold {
        run = run.bold();
    }
    run
}

/// Core timestamps go to `docProps/core.xml`; the descriptive fields are
/// stored as custom document properties.
fn properties(mut docx: Docx, metadata: &Metadata, title: Option<String>) -> Docx {
    if let Some(created) = metadata.created {
        docx = docx.created_at(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    if let Some(modified) = metadata.modified.or(metadata.created) {
        docx = docx.updated_at(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    let fields = [
        ("title", title),
        ("subject", metadata.subject.clone()),
        ("creator", metadata.author.clone()),
        ("keywords", metadata.keywords.clone()),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            docx = docx.custom_property(name, strip_invalid_chars(&value));
        }
    }
    docx
}

fn alignment(alignment: Alignment) -> Option<AlignmentType> {
    match alignment {
        Alignment::Left => None,
        Alignment::Center => Some(AlignmentType::Center),
        Alignment::Right => Some(AlignmentType::Right),
        Alignment::Justify => Some(AlignmentType::Both),
    }
}

/// Whether a character may appear in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Drop characters that XML 1.0 cannot represent. Escaping of markup
/// characters is left to `docx-rs`.
fn strip_invalid_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_xml_char(c)).collect())
    }
}
