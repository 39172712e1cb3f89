//! The field snapshot handed to the composer.

use serde::{Deserialize, Serialize};

use super::table::{is_blank_row, parse_headers, parse_rows};

/// Structured field values for one compose call.
///
/// A `DocumentFields` is built fresh from the current form state for every
/// action (generate, preview, save) and never outlives that action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentFields {
    /// Document title; empty omits the top-level heading
    pub title: String,

    /// Free-form description, word-wrapped on output
    pub description: String,

    /// Table column headers
    pub table_headers: Vec<String>,

    /// Table rows, each an ordered list of fields
    pub table_rows: Vec<Vec<String>>,

    /// Whether the header names are written above the separator line
    pub include_table_header: bool,

    /// Code snippet placed verbatim in a fenced block
    pub code_example: String,

    /// Image location
    pub image_url: String,

    /// Image alt text
    pub image_alt_text: String,
}

impl DocumentFields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set table headers from already-split values.
    pub fn with_headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.table_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Set table rows from already-split values.
    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.table_rows = rows;
        self
    }

    /// Parse table headers from a comma-separated string.
    pub fn with_raw_headers(mut self, raw: &str) -> Self {
        self.table_headers = parse_headers(raw);
        self
    }

    /// Parse table rows from a comma-separated string.
    pub fn with_raw_rows(mut self, raw: &str) -> Self {
        self.table_rows = parse_rows(raw);
        self
    }

    /// Include or omit the table header line text.
    pub fn with_table_header(mut self, include: bool) -> Self {
        self.include_table_header = include;
        self
    }

    /// Set the code example.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code_example = code.into();
        self
    }

    /// Set the image URL and alt text.
    pub fn with_image(mut self, url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        self.image_url = url.into();
        self.image_alt_text = alt_text.into();
        self
    }

    /// Check if a title is present.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Rows with at least one non-blank field, in input order.
    pub fn data_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.table_rows.iter().filter(|row| !is_blank_row(row.as_slice()))
    }

    /// Number of rows skipped because every field is blank.
    pub fn blank_row_count(&self) -> usize {
        self.table_rows.iter().filter(|row| is_blank_row(row.as_slice())).count()
    }

    /// Check whether the table section should be rendered.
    pub fn has_table(&self) -> bool {
        !self.table_headers.is_empty() && self.data_rows().next().is_some()
    }

    /// Check whether the image section should be rendered.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty() && !self.image_alt_text.is_empty()
    }

    /// Check if no section would be rendered.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && !self.has_table()
            && self.code_example.is_empty()
            && !self.has_image()
    }
}

impl Default for DocumentFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            table_headers: Vec::new(),
            table_rows: Vec::new(),
            include_table_header: true,
            code_example: String::new(),
            image_url: String::new(),
            image_alt_text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_includes_header() {
        let fields = DocumentFields::default();
        assert!(fields.include_table_header);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_has_table_requires_headers() {
        let fields = DocumentFields::new().with_raw_rows("1,2");
        assert!(!fields.has_table());

        let fields = fields.with_headers(["A"]);
        assert!(fields.has_table());
    }

    #[test]
    fn test_has_table_requires_non_blank_row() {
        let fields = DocumentFields::new()
            .with_headers(["A", "B"])
            .with_raw_rows(" , ,");
        assert!(!fields.has_table());
        assert_eq!(fields.blank_row_count(), 3);
    }

    #[test]
    fn test_data_rows_preserve_order() {
        let fields = DocumentFields::new()
            .with_headers(["A"])
            .with_raw_rows("x,,y,,z");
        let rows: Vec<_> = fields.data_rows().map(|r| r[0].as_str()).collect();
        assert_eq!(rows, vec!["x", "y", "z"]);
        assert_eq!(fields.blank_row_count(), 2);
    }

    #[test]
    fn test_has_image_needs_both() {
        assert!(!DocumentFields::new().with_image("http://x/y.png", "").has_image());
        assert!(!DocumentFields::new().with_image("", "pic").has_image());
        assert!(DocumentFields::new().with_image("http://x/y.png", "pic").has_image());
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let fields: DocumentFields = serde_json::from_str(r#"{"title":"Demo"}"#).unwrap();
        assert_eq!(fields.title, "Demo");
        assert!(fields.include_table_header);
        assert!(fields.table_headers.is_empty());
    }
}
