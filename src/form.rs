//! Raw form state and snapshotting.
//!
//! A host keeps a [`FormInput`] holding exactly what the user typed. Every
//! action takes a fresh [`DocumentFields`] snapshot from it, so the composer
//! never sees live, mutable form state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{parse_headers, parse_rows, DocumentFields};

/// One named text field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Title entry
    Title,
    /// Description entry
    Description,
    /// Comma-separated table headers
    Headers,
    /// Comma-separated table rows
    Rows,
    /// Code example entry
    Code,
    /// Image URL entry
    ImageUrl,
    /// Image alt text entry
    ImageAlt,
}

impl FormField {
    /// All text fields in form order.
    pub const ALL: [FormField; 7] = [
        FormField::Title,
        FormField::Description,
        FormField::Headers,
        FormField::Rows,
        FormField::Code,
        FormField::ImageUrl,
        FormField::ImageAlt,
    ];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Headers => "headers",
            FormField::Rows => "rows",
            FormField::Code => "code",
            FormField::ImageUrl => "image-url",
            FormField::ImageAlt => "image-alt",
        }
    }

    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Headers => "Table Headers (comma-separated)",
            FormField::Rows => "Table Data (rows, comma-separated)",
            FormField::Code => "Code Example",
            FormField::ImageUrl => "Image URL",
            FormField::ImageAlt => "Image Alt Text",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase().replace('_', "-");
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown field `{}`", s)))
    }
}

/// Raw, editable form contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    /// Project title
    pub title: String,
    /// Free-form description text
    pub description: String,
    /// Comma-separated table headers
    pub headers: String,
    /// Comma-separated table rows
    pub rows: String,
    /// Code example, kept verbatim apart from trimming
    pub code: String,
    /// Image URL
    pub image_url: String,
    /// Image alt text
    pub image_alt: String,
    /// Whether the table header text is written
    pub include_table_header: bool,
}

impl FormInput {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a form from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the raw value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Headers => &self.headers,
            FormField::Rows => &self.rows,
            FormField::Code => &self.code,
            FormField::ImageUrl => &self.image_url,
            FormField::ImageAlt => &self.image_alt,
        }
    }

    /// Replace the raw value of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Headers => &mut self.headers,
            FormField::Rows => &mut self.rows,
            FormField::Code => &mut self.code,
            FormField::ImageUrl => &mut self.image_url,
            FormField::ImageAlt => &mut self.image_alt,
        };
        *slot = value.into();
    }

    /// Builder-style [`FormInput::set`].
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Include or omit the table header text.
    pub fn with_table_header(mut self, include: bool) -> Self {
        self.include_table_header = include;
        self
    }

    /// Check whether the trimmed title is non-empty.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Reset every field to empty and re-enable the table header.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Take an immutable snapshot of the current values.
    ///
    /// Text entries are trimmed; headers and rows are parsed from their
    /// comma-separated form.
    pub fn snapshot(&self) -> DocumentFields {
        let fields = DocumentFields {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            table_headers: parse_headers(&self.headers),
            table_rows: parse_rows(&self.rows),
            include_table_header: self.include_table_header,
            code_example: self.code.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            image_alt_text: self.image_alt.trim().to_string(),
        };
        log::debug!(
            "Snapshot: {} headers, {} rows ({} blank)",
            fields.table_headers.len(),
            fields.table_rows.len(),
            fields.blank_row_count()
        );
        fields
    }
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            headers: String::new(),
            rows: String::new(),
            code: String::new(),
            image_url: String::new(),
            image_alt: String::new(),
            include_table_header: true,
        }
    }
}
