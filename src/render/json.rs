//! JSON export of field snapshots.

use crate::error::{Error, Result};
use crate::model::DocumentFields;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Export a field snapshot as JSON, pretty-printed or on one line.
pub fn to_json(fields: &DocumentFields, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(fields),
        JsonFormat::Compact => serde_json::to_string(fields),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
