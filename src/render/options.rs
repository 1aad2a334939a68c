//! Rendering options and configuration.

use crate::style::StyleSheet;

/// Options for rendering a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Paragraph styles
    pub styles: StyleSheet,

    /// Page size for the section properties
    pub page_size: PageSize,

    /// Include YAML frontmatter with metadata (Markdown output)
    pub include_frontmatter: bool,

    /// Character to use for unordered list markers (Markdown output)
    pub list_marker: char,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            styles: StyleSheet::default(),
            page_size: PageSize::Letter,
            include_frontmatter: false,
            list_marker: '-',
            collect_stats: false,
        }
    }
}

/// Page size of the document section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// US Letter (8.5 x 11 inches)
    #[default]
    Letter,
    /// A4 (210 x 297 mm)
    A4,
}

impl PageSize {
    /// Page dimensions as (width, height) in twips.
    pub fn twips(self) -> (u32, u32) {
        match self {
            PageSize::Letter => (12240, 15840), // 8.5 * 1440, 11 * 1440
            PageSize::A4 => (11906, 16838),     // 210mm, 297mm
        }
    }

    /// Parse a page size name ("letter" or "a4").
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            other => Err(format!("Unknown page size: {}", other)),
        }
    }
}
