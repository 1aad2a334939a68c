//! Paragraph style sheet.
//!
//! The style sheet is an immutable value handed to the renderer through
//! [`RenderOptions`](crate::render::RenderOptions). Each [`BlockKind`]
//! resolves to one named [`StyleDef`]; list items and blank spacers use the
//! body style.

use crate::error::{Error, Result};
use crate::model::BlockKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Twentieths of a point per point.
const TWIPS_PER_POINT: f32 = 20.0;
/// Points per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// Id of Word's default paragraph style. Every sheet style is based on it,
/// so no sheet style may claim it.
pub const DEFAULT_STYLE_ID: &str = "Normal";

/// A named paragraph style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDef {
    /// Display name (e.g. "Heading 1")
    pub name: String,

    /// Font size in points
    pub font_size: f32,

    /// Bold weight
    #[serde(default)]
    pub bold: bool,

    /// Font family, or None to inherit the document default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    /// Space after the paragraph in points
    #[serde(default)]
    pub space_after: f32,

    /// Outline level for navigation (0-based), used by headings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_level: Option<u8>,
}

impl StyleDef {
    /// Create a style with the given name, size and spacing.
    pub fn new(name: impl Into<String>, font_size: f32, space_after: f32) -> Self {
        Self {
            name: name.into(),
            font_size,
            bold: false,
            font: None,
            space_after,
            outline_level: None,
        }
    }

    /// Make the style bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Set the outline level.
    pub fn with_outline_level(mut self, level: u8) -> Self {
        self.outline_level = Some(level);
        self
    }

    /// Style identifier: the name with everything but ASCII alphanumerics removed.
    pub fn style_id(&self) -> String {
        self.name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect()
    }

    /// Font size in half-points.
    pub fn half_points(&self) -> u32 {
        (self.font_size * 2.0).round().max(1.0) as u32
    }

    /// Space after in twips.
    pub fn space_after_twips(&self) -> u32 {
        points_to_twips(self.space_after)
    }
}

/// The full set of paragraph styles used by a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Level-1 heading style
    pub heading1: StyleDef,

    /// Level-2 heading style
    pub heading2: StyleDef,

    /// Level-3 heading style
    pub heading3: StyleDef,

    /// Body text style, also used for list items and spacers
    pub normal: StyleDef,

    /// Code line style
    pub code: StyleDef,

    /// Left indent per list level in inches
    pub list_indent: f32,
}

impl StyleSheet {
    /// Load a style sheet from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let sheet: StyleSheet = serde_json::from_str(json)?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Load a style sheet from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the style sheet as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }

    /// Resolve the style for a block kind.
    pub fn for_kind(&self, kind: BlockKind) -> &StyleDef {
        match kind {
            BlockKind::Heading1 => &self.heading1,
            BlockKind::Heading2 => &self.heading2,
            BlockKind::Heading3 => &self.heading3,
            BlockKind::Code => &self.code,
            BlockKind::ListItem | BlockKind::Paragraph | BlockKind::BlankSpacer => &self.normal,
        }
    }

    /// All styles in declaration order.
    pub fn styles(&self) -> [&StyleDef; 5] {
        [
            &self.heading1,
            &self.heading2,
            &self.heading3,
            &self.normal,
            &self.code,
        ]
    }

    /// Left indent in twips for an indent level.
    pub fn indent_twips(&self, level: u8) -> u32 {
        points_to_twips(self.list_indent * POINTS_PER_INCH * f32::from(level))
    }

    fn validate(&self) -> Result<()> {
        let mut ids = Vec::new();
        for style in self.styles() {
            let id = style.style_id();
            if id.is_empty() {
                return Err(Error::Content(format!(
                    "style name {:?} has no usable identifier",
                    style.name
                )));
            }
            if id == DEFAULT_STYLE_ID {
                return Err(Error::Content(format!(
                    "style name {:?} collides with the default style {:?}",
                    style.name, DEFAULT_STYLE_ID
                )));
            }
            if style.font_size <= 0.0 {
                return Err(Error::Content(format!(
                    "style {:?} has non-positive font size",
                    style.name
                )));
            }
            if ids.contains(&id) {
                return Err(Error::Content(format!("duplicate style id {:?}", id)));
            }
            ids.push(id);
        }
        if self.list_indent < 0.0 {
            return Err(Error::Content("list indent must not be negative".into()));
        }
        Ok(())
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            heading1: StyleDef::new("Heading 1", 18.0, 12.0)
                .bold()
                .with_outline_level(0),
            heading2: StyleDef::new("Heading 2", 16.0, 10.0)
                .bold()
                .with_outline_level(1),
            heading3: StyleDef::new("Heading 3", 14.0, 8.0)
                .bold()
                .with_outline_level(2),
            normal: StyleDef::new("Normal Text", 12.0, 6.0),
            code: StyleDef::new("Code", 10.0, 6.0).with_font("Courier New"),
            list_indent: 0.25,
        }
    }
}

fn points_to_twips(points: f32) -> u32 {
    (points * TWIPS_PER_POINT).round().max(0.0) as u32
}
