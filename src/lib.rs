//! # readmegen
//!
//! Compose README-style Markdown documents from a handful of form fields.
//!
//! A title, a description, a small table, a code snippet and an image are
//! turned into a Markdown document with a fixed section order. Composition is
//! a pure function of the field values; saving, previewing and clearing are
//! command handlers that talk to a hosting UI through the [`Host`] trait.
//!
//! ## Quick Start
//!
//! ```
//! use readmegen::{compose, DocumentFields};
//!
//! let fields = DocumentFields::new()
//!     .with_title("Demo")
//!     .with_code("print(1)");
//!
//! let markdown = compose(&fields);
//! assert_eq!(markdown, "# Demo\n\n## Code Example\n```\nprint(1)\n```\n");
//! ```
//!
//! ## Sections
//!
//! - **Title**: `# title`
//! - **Description**: wrapped at 80 columns
//! - **Table**: header, separator and non-blank rows under `## Table`
//! - **Code Example**: an unlabelled fenced block
//! - **Image**: `![alt](url)` under `## Image`

pub mod command;
pub mod error;
pub mod form;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use command::{Command, CommandHandler, Host, Outcome, SaveDialog};
pub use error::{Error, Result};
pub use form::{FormField, FormInput};
pub use model::DocumentFields;
pub use render::{
    compose, compose_with, compose_with_stats, ComposeOptions, ComposeResult, ComposeStats,
    JsonFormat, Section,
};

/// Compose Markdown directly from raw form input.
///
/// # Example
///
/// ```
/// use readmegen::{compose_form, FormField, FormInput};
///
/// let form = FormInput::new().with(FormField::Title, "  Demo  ");
/// assert_eq!(compose_form(&form), "# Demo\n\n");
/// ```
pub fn compose_form(form: &FormInput) -> String {
    compose(&form.snapshot())
}

/// Builder for filling in a form and composing it.
///
/// # Example
///
/// ```
/// use readmegen::Readmegen;
///
/// let markdown = Readmegen::new()
///     .title("Demo")
///     .headers("Name, Value")
///     .rows("alpha, beta")
///     .compose();
/// assert!(markdown.contains("Name | Value\n---|---\nalpha\nbeta\n"));
/// ```
pub struct Readmegen {
    form: FormInput,
    options: ComposeOptions,
}

impl Readmegen {
    /// Create a new builder with an empty form.
    pub fn new() -> Self {
        Self {
            form: FormInput::default(),
            options: ComposeOptions::default(),
        }
    }

    /// Start from existing form input.
    pub fn from_form(form: FormInput) -> Self {
        Self {
            form,
            options: ComposeOptions::default(),
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.form.set(FormField::Title, title);
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.form.set(FormField::Description, description);
        self
    }

    /// Set the comma-separated table headers.
    pub fn headers(mut self, headers: impl Into<String>) -> Self {
        self.form.set(FormField::Headers, headers);
        self
    }

    /// Set the comma-separated table rows.
    pub fn rows(mut self, rows: impl Into<String>) -> Self {
        self.form.set(FormField::Rows, rows);
        self
    }

    /// Omit the header names from the table.
    pub fn without_table_header(mut self) -> Self {
        self.form.include_table_header = false;
        self
    }

    /// Set the code example.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.form.set(FormField::Code, code);
        self
    }

    /// Set the image URL and alt text.
    pub fn image(mut self, url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        self.form.set(FormField::ImageUrl, url);
        self.form.set(FormField::ImageAlt, alt_text);
        self
    }

    /// Set the description line width.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.options = self.options.with_line_width(width);
        self
    }

    /// Get the form being built.
    pub fn form(&self) -> &FormInput {
        &self.form
    }

    /// Take a field snapshot of the form.
    pub fn fields(&self) -> DocumentFields {
        self.form.snapshot()
    }

    /// Compose to Markdown.
    pub fn compose(&self) -> String {
        compose_with(&self.fields(), &self.options)
    }

    /// Compose to Markdown with statistics.
    pub fn compose_with_stats(&self) -> ComposeResult {
        compose_with_stats(&self.fields(), &self.options)
    }

    /// Export the field snapshot as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.fields(), format)
    }
}

impl Default for Readmegen {
    fn default() -> Self {
        Self::new()
    }
}
