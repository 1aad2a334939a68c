//! Rendering module for converting documents to output formats.

mod docx;
mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use docx::{save_docx, to_docx, to_docx_with_stats, DocxWriter, DOCX_MIME, PART_NAMES};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{PageSize, RenderOptions};
pub use result::{RenderResult, RenderStats};
pub use text::to_text;
