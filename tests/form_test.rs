//! Integration tests for form input and snapshots.

use readmegen::{compose, FormField, FormInput, Readmegen};

#[test]
fn test_snapshot_is_independent_of_later_edits() {
    let mut form = FormInput::new().with(FormField::Title, "Before");
    let snapshot = form.snapshot();

    form.set(FormField::Title, "After");

    assert_eq!(snapshot.title, "Before");
    assert_eq!(form.snapshot().title, "After");
}

#[test]
fn test_empty_headers_still_render_table() {
    // An empty header entry is still one header.
    let form = FormInput::new().with(FormField::Rows, "value");
    let fields = form.snapshot();

    assert_eq!(fields.table_headers, vec![""]);
    assert_eq!(compose(&fields), "## Table\n\n---\nvalue\n");
}

#[test]
fn test_empty_rows_skip_table() {
    let form = FormInput::new().with(FormField::Headers, "A, B");
    assert_eq!(compose(&form.snapshot()), "");
}

#[test]
fn test_row_tokens_trimmed() {
    let form = FormInput::new()
        .with(FormField::Headers, "A")
        .with(FormField::Rows, "  spaced out  ,x");
    let fields = form.snapshot();
    assert_eq!(fields.table_rows, vec![vec!["spaced out"], vec!["x"]]);
}

#[test]
fn test_form_json_round_trip_through_builder() {
    let form = FormInput::from_json(
        r#"{
            "title": "From JSON",
            "headers": "A",
            "rows": "1",
            "include_table_header": false
        }"#,
    )
    .unwrap();

    let markdown = Readmegen::from_form(form).compose();
    assert_eq!(markdown, "# From JSON\n\n## Table\n\n---\n1\n");
}

#[test]
fn test_unknown_json_keys_ignored() {
    let form = FormInput::from_json(r#"{"title": "x", "theme": "ubuntu"}"#).unwrap();
    assert_eq!(form.title, "x");
}

#[test]
fn test_malformed_json_is_error() {
    assert!(FormInput::from_json("[1, 2").is_err());
}
