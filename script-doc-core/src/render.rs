use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::document::ScriptDocument;

/// Errors that can occur while writing a rendered [`ScriptDocument`].
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output file.
    #[error("failed to write script file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a [`ScriptDocument`] to script text.
///
/// Sections render in document order as the section name on its own line
/// followed by one command per line. Sections with no commands are dropped,
/// and fully blank lines inside commands are stripped, so deep-equal
/// documents always render to byte-identical text.
pub fn render(document: &ScriptDocument) -> String {
    let mut out = String::new();
    for section in &document.sections {
        if section.commands.is_empty() {
            continue;
        }
        out.push_str(&section.name);
        out.push('\n');
        for command in &section.commands {
            for line in command.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}

/// Render a [`ScriptDocument`] and write it to `path`.
pub fn write_file(document: &ScriptDocument, path: &Path) -> Result<(), WriteError> {
    fs::write(path, render(document))?;
    Ok(())
}
