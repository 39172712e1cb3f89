//! Field model for README composition.
//!
//! [`DocumentFields`] is the immutable snapshot the composer consumes. The
//! `table` helpers turn the raw comma-separated table inputs into headers and
//! rows.

mod fields;
pub mod table;

pub use fields::DocumentFields;
pub use table::{is_blank_row, parse_headers, parse_rows};
