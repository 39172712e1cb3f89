//! Integration tests for Markdown composition.

use readmegen::model::parse_rows;
use readmegen::{compose, compose_with_stats, ComposeOptions, DocumentFields, Section};

fn create_full_fields() -> DocumentFields {
    DocumentFields::new()
        .with_title("Widget")
        .with_description("A small widget for doing small things.")
        .with_raw_headers("Name, Value")
        .with_raw_rows("alpha, , beta")
        .with_code("widget --run")
        .with_image("https://example.com/widget.png", "Widget logo")
}

#[test]
fn test_compose_is_idempotent() {
    let fields = create_full_fields();
    assert_eq!(compose(&fields), compose(&fields));
}

#[test]
fn test_compose_all_empty() {
    assert_eq!(compose(&DocumentFields::default()), "");
}

#[test]
fn test_compose_title_only_exact() {
    let fields = DocumentFields::new().with_title("Demo");
    assert_eq!(compose(&fields), "# Demo\n\n");
}

#[test]
fn test_omitting_title_leaves_other_sections() {
    let with_title = compose(&create_full_fields());
    let without_title = compose(&create_full_fields().with_title(""));

    assert!(!without_title.contains("# Widget"));
    assert_eq!(with_title.strip_prefix("# Widget\n\n"), Some(without_title.as_str()));
}

#[test]
fn test_overlong_word_stays_on_one_line() {
    let word = "x".repeat(85);
    let fields = DocumentFields::new().with_description(word.clone());
    let markdown = compose(&fields);

    let lines: Vec<_> = markdown.lines().collect();
    assert_eq!(lines[0], word);
    assert_eq!(lines[0].len(), 85);
}

#[test]
fn test_split_twice_row_parsing() {
    let rows = parse_rows("1,2,,,3,4");
    let tokens: Vec<_> = rows.iter().map(|r| r.join(",")).collect();
    assert_eq!(tokens, vec!["1", "2", "", "", "3", "4"]);
    assert!(rows.iter().all(|r| r.len() == 1));

    let fields = DocumentFields::new().with_headers(["A", "B"]).with_rows(rows);
    assert_eq!(
        compose(&fields),
        "## Table\nA | B\n---|---\n1\n2\n3\n4\n"
    );
}

#[test]
fn test_code_block_has_no_language() {
    let fields = DocumentFields::new().with_code("print(1)");
    assert!(compose(&fields).contains("```\nprint(1)\n```"));
}

#[test]
fn test_image_syntax() {
    let fields = DocumentFields::new().with_image("http://x/y.png", "pic");
    assert!(compose(&fields).contains("![pic](http://x/y.png)"));
}

#[test]
fn test_full_document_order() {
    let markdown = compose(&create_full_fields());
    assert_eq!(
        markdown,
        "# Widget\n\n\
         A small widget for doing small things.\n\n\
         ## Table\nName | Value\n---|---\nalpha\nbeta\n\
         ## Code Example\n```\nwidget --run\n```\n\
         ## Image\n![Widget logo](https://example.com/widget.png)\n"
    );
}

#[test]
fn test_stats_match_sections() {
    let result = compose_with_stats(&create_full_fields(), &ComposeOptions::default());

    assert_eq!(result.stats.sections, Section::ALL.to_vec());
    assert_eq!(result.stats.table_row_count, 2);
    assert_eq!(result.stats.dropped_row_count, 1);
    assert_eq!(result.stats.line_count as usize, result.content.lines().count());
}

#[test]
fn test_long_description_wraps_at_80() {
    let description = "lorem ipsum dolor sit amet ".repeat(12);
    let fields = DocumentFields::new().with_description(description.trim());
    let markdown = compose(&fields);

    let body = markdown.trim_end_matches('\n');
    assert!(body.lines().count() > 1);
    assert!(body.lines().all(|line| line.chars().count() <= 80));
    assert_eq!(
        body.split_whitespace().collect::<Vec<_>>(),
        description.split_whitespace().collect::<Vec<_>>()
    );
}
