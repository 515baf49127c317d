//! `/interface vlan` generator.

use script_doc_core::ScriptDocument;

use super::CommandBuilder;
use crate::error::ValidationError;
use crate::section;
use crate::state::VlanSpec;
use crate::validate::ensure_vlan_id;

/// Build the interface-creation command for one VLAN.
///
/// Fails on an unusable VLAN id; the interface name defaults to `vlan<id>`
/// when none is supplied.
pub fn generate(spec: &VlanSpec) -> Result<ScriptDocument, ValidationError> {
    let id = ensure_vlan_id(spec.id)?;
    let name = spec
        .name
        .clone()
        .unwrap_or_else(|| format!("vlan{id}"));

    let command = CommandBuilder::new("add")
        .arg("interface", &spec.interface)
        .arg("name", name)
        .arg("vlan-id", id)
        .opt_quoted("comment", spec.comment.as_deref())
        .build();

    let mut fragment = ScriptDocument::new();
    fragment.push_command(section::VLAN, command);
    Ok(fragment)
}
