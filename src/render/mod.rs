//! Rendering module for composing Markdown from document fields.

mod json;
mod markdown;
mod options;
mod result;
pub mod wrap;

pub use json::{to_json, JsonFormat};
pub use markdown::{compose, compose_with, compose_with_stats, MarkdownComposer};
pub use options::{ComposeOptions, DEFAULT_LINE_WIDTH};
pub use result::{ComposeResult, ComposeStats, Section};
