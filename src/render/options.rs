//! Compose options and configuration.

/// Line width used to wrap the description.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Options for composing Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Width for wrapping the description (0 = no wrap)
    pub line_width: usize,

    /// Collect section statistics during composition
    pub collect_stats: bool,
}

impl ComposeOptions {
    /// Create new compose options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set line width for wrapping.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_options_builder() {
        let options = ComposeOptions::new().with_line_width(60).with_stats(true);

        assert_eq!(options.line_width, 60);
        assert!(options.collect_stats);
    }

    #[test]
    fn test_compose_options_defaults() {
        let options = ComposeOptions::default();
        assert_eq!(options.line_width, 80);
        assert!(!options.collect_stats);
    }
}
