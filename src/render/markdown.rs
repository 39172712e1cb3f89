//! Markdown composition from document fields.

use crate::model::table::{separator_line, CELL_SEPARATOR};
use crate::model::DocumentFields;

use super::wrap::fill;
use super::{ComposeOptions, ComposeResult, ComposeStats, Section};

/// Compose a Markdown document with default options.
///
/// Sections are written in fixed order (title, description, table, code
/// example, image); a section whose fields are empty contributes nothing.
/// Composing never fails: an empty field set yields an empty string.
pub fn compose(fields: &DocumentFields) -> String {
    compose_with(fields, &ComposeOptions::default())
}

/// Compose a Markdown document with custom options.
///
/// `collect_stats` is ignored here; use [`compose_with_stats`] to get
/// statistics back.
pub fn compose_with(fields: &DocumentFields, options: &ComposeOptions) -> String {
    MarkdownComposer::new(options.clone()).compose(fields)
}

/// Compose a Markdown document and collect statistics.
pub fn compose_with_stats(fields: &DocumentFields, options: &ComposeOptions) -> ComposeResult {
    let mut options = options.clone();
    options.collect_stats = true;
    MarkdownComposer::new(options).compose_with_stats(fields)
}

/// Markdown composer.
pub struct MarkdownComposer {
    options: ComposeOptions,
    stats: ComposeStats,
}

impl MarkdownComposer {
    /// Create a new Markdown composer.
    pub fn new(options: ComposeOptions) -> Self {
        Self {
            options,
            stats: ComposeStats::new(),
        }
    }

    /// Compose fields into Markdown, skipping statistics.
    pub fn compose(mut self, fields: &DocumentFields) -> String {
        self.options.collect_stats = false;
        self.compose_internal(fields)
    }

    /// Compose fields into Markdown with statistics.
    pub fn compose_with_stats(mut self, fields: &DocumentFields) -> ComposeResult {
        self.options.collect_stats = true;
        let content = self.compose_internal(fields);
        self.stats.count_text(&content);
        ComposeResult::new(content, self.stats)
    }

    fn compose_internal(&mut self, fields: &DocumentFields) -> String {
        let mut output = String::new();

        self.render_title(&mut output, &fields.title);
        self.render_description(&mut output, &fields.description);
        self.render_table(&mut output, fields);
        self.render_code(&mut output, &fields.code_example);
        self.render_image(&mut output, &fields.image_url, &fields.image_alt_text);

        output
    }

    fn record(&mut self, section: Section) {
        log::debug!("Rendering section: {}", section);
        if self.options.collect_stats {
            self.stats.add_section(section);
        }
    }

    fn render_title(&mut self, output: &mut String, title: &str) {
        if title.is_empty() {
            return;
        }
        self.record(Section::Title);

        output.push_str("# ");
        output.push_str(title);
        output.push_str("\n\n");
    }

    fn render_description(&mut self, output: &mut String, description: &str) {
        if description.is_empty() {
            return;
        }
        self.record(Section::Description);

        let wrapped = fill(description, self.options.line_width);
        if self.options.collect_stats {
            self.stats.description_line_count = wrapped.lines().count() as u32;
        }
        output.push_str(&wrapped);
        output.push_str("\n\n");
    }

    fn render_table(&mut self, output: &mut String, fields: &DocumentFields) {
        if !fields.has_table() {
            if !fields.table_headers.is_empty() {
                log::debug!("Skipping table: no non-blank rows");
            }
            return;
        }
        self.record(Section::Table);

        let header_line = if fields.include_table_header {
            fields.table_headers.join(CELL_SEPARATOR)
        } else {
            String::new()
        };

        let data_lines: Vec<String> = fields
            .data_rows()
            .map(|row| row.join(CELL_SEPARATOR))
            .collect();

        if self.options.collect_stats {
            self.stats.table_row_count = data_lines.len() as u32;
            self.stats.dropped_row_count = fields.blank_row_count() as u32;
        }

        output.push_str("## Table\n");
        output.push_str(&header_line);
        output.push('\n');
        output.push_str(&separator_line(fields.table_headers.len()));
        output.push('\n');
        output.push_str(&data_lines.join("\n"));
        output.push('\n');
    }

    fn render_code(&mut self, output: &mut String, code: &str) {
        if code.is_empty() {
            return;
        }
        self.record(Section::CodeExample);

        output.push_str("## Code Example\n```\n");
        output.push_str(code);
        output.push_str("\n```\n");
    }

    fn render_image(&mut self, output: &mut String, url: &str, alt_text: &str) {
        if url.is_empty() || alt_text.is_empty() {
            return;
        }
        self.record(Section::Image);

        output.push_str(&format!("## Image\n![{}]({})\n", alt_text, url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_empty() {
        assert_eq!(compose(&DocumentFields::default()), "");
    }

    #[test]
    fn test_compose_title_only() {
        let fields = DocumentFields::new().with_title("Demo");
        assert_eq!(compose(&fields), "# Demo\n\n");
    }

    #[test]
    fn test_compose_description_wrapped() {
        let description = "word ".repeat(30);
        let fields = DocumentFields::new().with_description(description.trim());
        let md = compose(&fields);

        assert!(md.ends_with("\n\n"));
        for line in md.trim_end().lines() {
            assert!(line.chars().count() <= 80);
        }
        assert_eq!(md.trim_end().lines().count(), 2);
    }

    #[test]
    fn test_compose_description_overlong_word() {
        let word = "x".repeat(85);
        let fields = DocumentFields::new().with_description(word.clone());
        assert_eq!(compose(&fields), format!("{}\n\n", word));
    }

    #[test]
    fn test_compose_table() {
        let fields = DocumentFields::new()
            .with_headers(["A", "B"])
            .with_rows(vec![
                vec!["1".into(), "2".into()],
                vec![" ".into(), "".into()],
                vec!["3".into(), "4".into()],
            ]);
        assert_eq!(
            compose(&fields),
            "## Table\nA | B\n---|---\n1 | 2\n3 | 4\n"
        );
    }

    #[test]
    fn test_compose_table_without_header_text() {
        let fields = DocumentFields::new()
            .with_headers(["A", "B", "C"])
            .with_raw_rows("x")
            .with_table_header(false);
        assert_eq!(compose(&fields), "## Table\n\n---|---|---\nx\n");
    }

    #[test]
    fn test_compose_table_all_blank_rows() {
        let fields = DocumentFields::new()
            .with_headers(["A"])
            .with_raw_rows(" , ");
        assert_eq!(compose(&fields), "");
    }

    #[test]
    fn test_compose_code() {
        let fields = DocumentFields::new().with_code("print(1)");
        assert_eq!(compose(&fields), "## Code Example\n```\nprint(1)\n```\n");
    }

    #[test]
    fn test_compose_code_not_escaped() {
        let fields = DocumentFields::new().with_code("```rust\nfn main() {}\n```");
        assert!(compose(&fields).contains("```\n```rust\nfn main() {}\n```\n```\n"));
    }

    #[test]
    fn test_compose_image() {
        let fields = DocumentFields::new().with_image("http://x/y.png", "pic");
        assert_eq!(compose(&fields), "## Image\n![pic](http://x/y.png)\n");
    }

    #[test]
    fn test_compose_section_order() {
        let fields = DocumentFields::new()
            .with_title("T")
            .with_description("D")
            .with_headers(["H"])
            .with_raw_rows("r")
            .with_code("c")
            .with_image("u", "a");
        assert_eq!(
            compose(&fields),
            "# T\n\nD\n\n## Table\nH\n---\nr\n## Code Example\n```\nc\n```\n## Image\n![a](u)\n"
        );
    }

    #[test]
    fn test_compose_custom_width() {
        let fields = DocumentFields::new().with_description("aaa bbb ccc");
        let options = ComposeOptions::new().with_line_width(7);
        assert_eq!(compose_with(&fields, &options), "aaa bbb\nccc\n\n");
    }

    #[test]
    fn test_compose_with_stats() {
        let fields = DocumentFields::new()
            .with_title("Demo")
            .with_headers(["A", "B"])
            .with_raw_rows("1,2,,,3,4");
        let result = compose_with_stats(&fields, &ComposeOptions::default());

        assert_eq!(result.stats.sections, vec![Section::Title, Section::Table]);
        assert_eq!(result.stats.table_row_count, 4);
        assert_eq!(result.stats.dropped_row_count, 2);
        assert_eq!(result.content, compose(&fields));
    }

    #[test]
    fn test_compose_with_ignores_stats_flag() {
        let fields = DocumentFields::new()
            .with_title("Demo")
            .with_description("Short text.");
        let options = ComposeOptions::new().with_stats(true);

        assert_eq!(compose_with(&fields, &options), compose(&fields));
    }

    #[test]
    fn test_stats_not_collected_by_default() {
        let mut composer = MarkdownComposer::new(ComposeOptions::default());
        let fields = DocumentFields::new().with_title("Demo");
        composer.compose_internal(&fields);
        assert!(composer.stats.sections.is_empty());
    }
}
