//! Save dialog description and file writing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// What a host's save dialog should offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDialog {
    /// Extension appended when the chosen path has none (without the dot)
    pub default_extension: &'static str,

    /// Display name of the file filter
    pub filter_name: &'static str,

    /// Glob pattern of the file filter
    pub filter_pattern: &'static str,
}

impl SaveDialog {
    /// Dialog settings for Markdown output.
    pub const MARKDOWN: SaveDialog = SaveDialog {
        default_extension: "md",
        filter_name: "Markdown files",
        filter_pattern: "*.md",
    };

    /// Apply the default extension to a path that has none.
    ///
    /// A trailing dot (`README.`) counts as no extension.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match path.extension() {
            Some(ext) if !ext.is_empty() => path.to_path_buf(),
            _ => path.with_extension(self.default_extension),
        }
    }
}

impl Default for SaveDialog {
    fn default() -> Self {
        Self::MARKDOWN
    }
}

/// Write Markdown text to `path`, creating or truncating the file.
pub fn write_markdown(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text.as_bytes())?;
    log::info!("Saved {} bytes to {}", text.len(), path.display());
    Ok(())
}
