use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// One configuration context: a section name and its ordered commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section name, e.g. a device menu path like `/ip firewall mangle`.
    pub name: String,
    /// Commands in emission order. Order is semantically meaningful: later
    /// commands may reference names introduced by earlier ones.
    pub commands: Vec<String>,
}

/// An order-preserving map from section name to ordered command list.
///
/// Section names are unique within one document and iterate in first-insert
/// order. Merging is append-only: commands are concatenated, never reordered
/// or deduplicated, so rendering the same document twice is byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptDocument {
    /// Sections in first-seen order.
    pub sections: Vec<Section>,
}

impl ScriptDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one command to a section, creating the section at the end of
    /// the document if it does not exist yet.
    pub fn push_command(&mut self, section: impl Into<String>, command: impl Into<String>) {
        let name = section.into();
        let command = command.into();
        if let Some(existing) = self.sections.iter_mut().find(|s| s.name == name) {
            existing.commands.push(command);
            return;
        }
        self.sections.push(Section {
            name,
            commands: vec![command],
        });
    }

    /// Append several commands to a section.
    pub fn extend_section<I, S>(&mut self, section: &str, commands: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for command in commands {
            self.push_command(section, command);
        }
    }

    /// Return the commands of a section, if present.
    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.commands.as_slice())
    }

    /// Return a mutable reference to the commands of a section, if present.
    pub fn section_commands_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        self.sections
            .iter_mut()
            .find(|s| s.name == name)
            .map(|s| &mut s.commands)
    }

    /// True if the document has a section with this name, even an empty one.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name == name)
    }

    /// Append every section of `other` into `self`, concatenating command
    /// lists for sections that already exist and adding unseen sections at
    /// the end in `other`'s order.
    pub fn merge_from(&mut self, other: &ScriptDocument) {
        for section in &other.sections {
            if let Some(existing) = self.sections.iter_mut().find(|s| s.name == section.name) {
                existing.commands.extend(section.commands.iter().cloned());
            } else {
                self.sections.push(section.clone());
            }
        }
    }

    /// Total number of commands across all sections.
    pub fn command_count(&self) -> usize {
        self.sections.iter().map(|s| s.commands.len()).sum()
    }

    /// True if the document holds no commands at all.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.commands.is_empty())
    }
}

impl Display for ScriptDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::render::render(self))
    }
}

/// Merge fragments into one document in input order.
///
/// For each fragment, each section's commands are appended to the
/// accumulator's list for that section, creating unseen sections in
/// first-seen order. No validation, no deduplication; a section that ends
/// up with zero commands is kept (the renderer drops it later).
pub fn merge(fragments: &[ScriptDocument]) -> ScriptDocument {
    let mut out = ScriptDocument::new();
    for fragment in fragments {
        out.merge_from(fragment);
    }
    out
}
