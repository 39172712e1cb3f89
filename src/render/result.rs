//! Compose result with section statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One optional block of the generated document, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// `# ` heading from the title
    Title,
    /// `## Description` with wrapped text
    Description,
    /// `## Table` with optional header line
    Table,
    /// `## Code Example` fenced block
    CodeExample,
    /// `## Image` embed with alt text
    Image,
}

impl Section {
    /// Every section in fixed output order.
    pub const ALL: [Section; 5] = [
        Section::Title,
        Section::Description,
        Section::Table,
        Section::CodeExample,
        Section::Image,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Title => "Title",
            Section::Description => "Description",
            Section::Table => "Table",
            Section::CodeExample => "Code Example",
            Section::Image => "Image",
        };
        f.write_str(name)
    }
}

/// Result of composing a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeResult {
    /// The composed Markdown
    pub content: String,

    /// Composition statistics
    pub stats: ComposeStats,
}

impl ComposeResult {
    /// Create a new compose result.
    pub fn new(content: String, stats: ComposeStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while composing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComposeStats {
    /// Sections that produced output, in order
    pub sections: Vec<Section>,

    /// Number of table data lines written
    pub table_row_count: u32,

    /// Number of blank table rows skipped
    pub dropped_row_count: u32,

    /// Number of lines the description wrapped to
    pub description_line_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,

    /// Number of lines in the output
    pub line_count: u32,
}

impl ComposeStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendered section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if a section was rendered.
    pub fn rendered(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Add word, character and line counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
        self.line_count += text.lines().count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_stats_count_text() {
        let mut stats = ComposeStats::new();
        stats.count_text("# Demo\n\nHello, world!\n");

        assert_eq!(stats.word_count, 4);
        // "#DemoHello,world!" = 17 non-whitespace chars
        assert_eq!(stats.char_count, 17);
        assert_eq!(stats.line_count, 3);
    }

    #[test]
    fn test_compose_stats_sections() {
        let mut stats = ComposeStats::new();
        stats.add_section(Section::Title);
        stats.add_section(Section::Image);

        assert!(stats.rendered(Section::Title));
        assert!(!stats.rendered(Section::Table));
        assert!(stats.rendered(Section::Image));
    }

    #[test]
    fn test_section_display() {
        assert_eq!(Section::CodeExample.to_string(), "Code Example");
        assert_eq!(Section::ALL.len(), 5);
    }
}
