//! Markdown-like text translation.

mod line;
mod markdown;
mod options;

pub use line::{classify, has_unbalanced_emphasis, split_emphasis, LineKind};
pub use markdown::{Blocks, LineTranslator, MarkdownParser};
pub use options::{FenceMode, ParseOptions};
