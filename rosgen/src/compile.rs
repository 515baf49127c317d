//! Compile orchestration: desired state → generators → merge → sort → text.
//!
//! Compilation is all-or-nothing. Any validator or generator failure aborts
//! the whole compile synchronously; no partial script text is ever produced
//! and nothing is retried (the computation is pure and CPU-only).

use script_doc_core::{merge, render, ScriptDocument};

use crate::error::{CompileError, StructuralError};
use crate::gen::{automation, baseline, dns_policy, tunnel, vlan, vxlan, wan, CommandBuilder};
use crate::section;
use crate::sort::sort_marking_rules;
use crate::state::DesiredState;

/// Fixed trailer: let the device settle, then restart into the new
/// configuration.
pub const TRAILER: &str = ":delay 60\n/system reboot\n";

/// Run every generator over the state and assemble the final document.
pub fn compile_document(state: &DesiredState) -> Result<ScriptDocument, CompileError> {
    let mut fragments = Vec::new();

    if let Some(identity) = &state.identity {
        let mut fragment = ScriptDocument::new();
        fragment.push_command(
            section::IDENTITY,
            CommandBuilder::new("set").quoted("name", identity).build(),
        );
        fragments.push(fragment);
    }

    fragments.push(wan::generate(&state.wan)?);
    for spec in &state.vlans {
        fragments.push(vlan::generate(spec)?);
    }
    for spec in &state.tunnels.ipip {
        fragments.push(tunnel::generate_ipip(spec));
    }
    for spec in &state.tunnels.eoip {
        fragments.push(tunnel::generate_eoip(spec));
    }
    for spec in &state.tunnels.gre {
        fragments.push(tunnel::generate_gre(spec));
    }
    for spec in &state.tunnels.vxlan {
        fragments.push(vxlan::generate(spec)?);
    }
    if let Some(policy) = &state.dns {
        fragments.push(dns_policy::generate(policy));
    }
    fragments.push(automation::generate(&state.automation));
    if let Some(spec) = &state.hardening {
        fragments.push(baseline::generate(spec));
    }

    let mut document = merge(&fragments);

    // Only the sorter reorders commands, and only in designated sections.
    for name in section::SORTED_SECTIONS {
        if let Some(commands) = document.section_commands_mut(name) {
            sort_marking_rules(commands);
        }
    }

    // Defensive: a configured DNS policy must have materialized its
    // packet-marking rules.
    let wants_marks = state.dns.as_ref().is_some_and(|p| !p.resolvers.is_empty());
    if wants_marks && !document.has_section(section::MANGLE) {
        return Err(StructuralError::MissingSection(section::MANGLE.to_string()).into());
    }

    Ok(document)
}

/// Compile the desired state to final script text, trailer included.
pub fn compile(state: &DesiredState) -> Result<String, CompileError> {
    let document = compile_document(state)?;
    let mut text = render(&document);
    text.push_str(TRAILER);
    Ok(text)
}
