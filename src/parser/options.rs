//! Parsing options and configuration.

/// Options for translating Markdown-like text into blocks.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// How fenced-code delimiters are handled
    pub fence_mode: FenceMode,

    /// Drop bold runs that would be empty (e.g. from `****`)
    pub skip_empty_emphasis: bool,

    /// Apply Unicode NFC normalization to each line before classification
    pub normalize_unicode: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fence mode.
    pub fn with_fence_mode(mut self, mode: FenceMode) -> Self {
        self.fence_mode = mode;
        self
    }

    /// Render fenced regions as code lines instead of translating them.
    pub fn fenced_code_blocks(mut self) -> Self {
        self.fence_mode = FenceMode::CodeBlocks;
        self
    }

    /// Enable or disable dropping of empty bold runs.
    pub fn with_skip_empty_emphasis(mut self, skip: bool) -> Self {
        self.skip_empty_emphasis = skip;
        self
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

/// Fenced-code handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FenceMode {
    /// Drop delimiter lines only; enclosed lines are classified like any
    /// other line.
    #[default]
    SkipDelimiters,
    /// Drop delimiter lines and emit enclosed lines verbatim as code blocks.
    CodeBlocks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.fence_mode, FenceMode::SkipDelimiters);
        assert!(!options.skip_empty_emphasis);
        assert!(!options.normalize_unicode);
    }

    #[test]
    fn test_options_builder() {
        let options = ParseOptions::new()
            .fenced_code_blocks()
            .with_skip_empty_emphasis(true)
            .with_unicode_normalization(true);

        assert_eq!(options.fence_mode, FenceMode::CodeBlocks);
        assert!(options.skip_empty_emphasis);
        assert!(options.normalize_unicode);
    }
}
