//! Table header and row parsing.
//!
//! Both inputs arrive as single comma-separated strings from the form.
//! Rows are split on commas twice: once to separate rows, then again within
//! each row. Because the first split already consumed every comma, each row
//! always ends up with exactly one field, so `"1,2,3"` is three one-column
//! rows rather than one three-column row. This is the long-standing behavior
//! of the form and is reproduced as-is.

/// Column separator used in header and data lines.
pub const CELL_SEPARATOR: &str = " | ";

/// Split a comma-separated header string into trimmed header names.
///
/// An empty input yields a single empty header, matching `str::split`.
pub fn parse_headers(raw: &str) -> Vec<String> {
    raw.split(',').map(|h| h.trim().to_string()).collect()
}

/// Split a comma-separated row string into rows of fields.
pub fn parse_rows(raw: &str) -> Vec<Vec<String>> {
    raw.split(',')
        .map(|row| row.trim().split(',').map(str::to_string).collect())
        .collect()
}

/// Check if every field in a row is blank after trimming.
pub fn is_blank_row<S: AsRef<str>>(row: &[S]) -> bool {
    row.iter().all(|field| field.as_ref().trim().is_empty())
}

/// Build the separator line: one `---` per header, joined with `|`.
pub fn separator_line(column_count: usize) -> String {
    vec!["---"; column_count].join("|")
}
