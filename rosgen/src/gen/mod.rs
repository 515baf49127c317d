//! Section generators.
//!
//! One module per feature domain, each a pure function from a narrow slice
//! of [`crate::state::DesiredState`] to a [`script_doc_core::ScriptDocument`]
//! fragment. Generators share one contract: identical input yields an
//! identical, byte-stable command list — no randomness, no clock reads, no
//! I/O. An absent feature yields an empty fragment, never an error.

use std::fmt::Display;

pub mod automation;
pub mod baseline;
pub mod dhcp_client;
pub mod dns_policy;
pub mod tunnel;
pub mod vlan;
pub mod vxlan;
pub mod wan;

/// Quote a value for RouterOS: wrap in double quotes and escape the
/// characters the CLI would otherwise interpret.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Builds one command as `verb key=value ...` with a fixed parameter order.
///
/// Optional parameters are appended only when present; boolean parameters
/// always render as the literal `yes`/`no`.
pub(crate) struct CommandBuilder {
    parts: Vec<String>,
}

impl CommandBuilder {
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            parts: vec![verb.into()],
        }
    }

    pub fn arg(mut self, key: &str, value: impl Display) -> Self {
        self.parts.push(format!("{key}={value}"));
        self
    }

    pub fn quoted(self, key: &str, value: &str) -> Self {
        let quoted = quote(value);
        self.arg(key, quoted)
    }

    pub fn flag(self, key: &str, on: bool) -> Self {
        self.arg(key, if on { "yes" } else { "no" })
    }

    pub fn opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.arg(key, value),
            None => self,
        }
    }

    pub fn opt_quoted(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.quoted(key, value),
            None => self,
        }
    }

    pub fn opt_flag(self, key: &str, value: Option<bool>) -> Self {
        match value {
            Some(on) => self.flag(key, on),
            None => self,
        }
    }

    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}
