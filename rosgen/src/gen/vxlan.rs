//! VXLAN overlay generator.

use script_doc_core::ScriptDocument;

use super::tunnel::{point_to_point_bundle, TunnelClass};
use super::CommandBuilder;
use crate::error::{CompileError, RuleViolation};
use crate::section;
use crate::state::{BumMode, VtepPeer, VxlanSpec};
use crate::validate::ensure_mac;

/// Build the fragment for one VXLAN overlay: the interface creation command
/// followed by one VTEP command per peer.
///
/// When no VTEP is configured but a single remote address is given, exactly
/// one default VTEP is synthesized from it. Unicast BUM mode requires at
/// least one VTEP after synthesis; multicast tolerates none.
pub fn generate(spec: &VxlanSpec) -> Result<ScriptDocument, CompileError> {
    if let Some(mac) = &spec.mac_address {
        ensure_mac(mac)?;
    }

    let vteps = effective_vteps(spec);
    if spec.bum_mode == BumMode::Unicast && vteps.is_empty() {
        return Err(RuleViolation::UnicastWithoutVtep(spec.name.clone()).into());
    }

    let command = CommandBuilder::new("add")
        .arg("name", &spec.name)
        .arg("vni", spec.vni)
        .opt("port", spec.port)
        .opt("local-address", spec.local_address)
        .opt("mtu", spec.mtu)
        .opt("mac-address", spec.mac_address.as_deref())
        .opt_quoted("comment", spec.comment.as_deref())
        .build();

    let mut fragment = ScriptDocument::new();
    fragment.push_command(section::VXLAN, command);

    for vtep in &vteps {
        let command = CommandBuilder::new("add")
            .arg("interface", &spec.name)
            .arg("remote-ip", vtep.remote)
            .opt_quoted("comment", vtep.comment.as_deref())
            .build();
        fragment.push_command(section::VXLAN_VTEPS, command);
    }

    if let Some(local) = spec.local_address {
        if spec.remote_address.is_some() {
            point_to_point_bundle(&mut fragment, TunnelClass::Vxlan, &spec.name, local);
        }
    }
    Ok(fragment)
}

fn effective_vteps(spec: &VxlanSpec) -> Vec<VtepPeer> {
    if !spec.vteps.is_empty() {
        return spec.vteps.clone();
    }
    match spec.remote_address {
        Some(remote) => vec![VtepPeer {
            remote,
            comment: None,
        }],
        None => Vec::new(),
    }
}
