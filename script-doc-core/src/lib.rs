//! Generic ordered script-document primitives used by higher-level compilers.

pub mod document;
pub mod format;
pub mod render;

pub use document::{merge, ScriptDocument, Section};
pub use format::{format_json, format_sections, format_summary};
pub use render::{render, write_file, WriteError};
