//! Error types for readmegen library.

use std::io;
use thiserror::Error;

/// Result type alias for readmegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while handling form actions.
///
/// Composing Markdown never fails; these errors come from the actions around
/// it (saving, loading field files, exporting).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A save was requested while the title field was empty.
    #[error("Title must be filled before saving to file.")]
    MissingTitle,

    /// Field input could not be read (malformed fields file, unknown field name).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error during rendering (JSON export).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingTitle;
        assert_eq!(
            err.to_string(),
            "Title must be filled before saving to file."
        );

        let err = Error::InvalidInput("unknown field `foo`".to_string());
        assert_eq!(err.to_string(), "Invalid input: unknown field `foo`");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
