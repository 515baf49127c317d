//! IPIP, EoIP and GRE tunnel generators.
//!
//! The three classes share the point-to-point [`TunnelSpec`]; each class
//! builds exactly one `add` command with conditional parameters in a fixed
//! order. A specification carrying both addresses additionally gets the
//! point-to-point bundle: a /30 interface address, generic plus class
//! interface-list memberships, and an address-list entry for the derived
//! /30 network. The bundle is emitted as a whole or not at all.

use std::net::Ipv4Addr;

use script_doc_core::ScriptDocument;

use super::CommandBuilder;
use crate::section;
use crate::state::{EoipSpec, TunnelSpec};

/// Tunnel class, mapped to its section and interface-list name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunnelClass {
    Ipip,
    Eoip,
    Gre,
    Vxlan,
}

impl TunnelClass {
    pub fn section(self) -> &'static str {
        match self {
            TunnelClass::Ipip => section::IPIP,
            TunnelClass::Eoip => section::EOIP,
            TunnelClass::Gre => section::GRE,
            TunnelClass::Vxlan => section::VXLAN,
        }
    }

    pub fn list_name(self) -> &'static str {
        match self {
            TunnelClass::Ipip => "IPIP",
            TunnelClass::Eoip => "EOIP",
            TunnelClass::Gre => "GRE",
            TunnelClass::Vxlan => "VXLAN",
        }
    }
}

/// Apply generator-local business rules before any command is built.
///
/// An IPsec secret disables fast path on the device, so `allow-fast-path`
/// is forced to `no` whenever a secret is present, even if the caller asked
/// for `yes`. Without a secret the caller's value passes through unchanged.
pub fn normalize(spec: &TunnelSpec) -> TunnelSpec {
    let mut out = spec.clone();
    if out.ipsec_secret.is_some() {
        out.allow_fast_path = Some(false);
    }
    out
}

/// Build the fragment for one IPIP tunnel.
pub fn generate_ipip(spec: &TunnelSpec) -> ScriptDocument {
    emit(TunnelClass::Ipip, &normalize(spec), None)
}

/// Build the fragment for one GRE tunnel.
pub fn generate_gre(spec: &TunnelSpec) -> ScriptDocument {
    emit(TunnelClass::Gre, &normalize(spec), None)
}

/// Build the fragment for one EoIP tunnel.
pub fn generate_eoip(spec: &EoipSpec) -> ScriptDocument {
    emit(TunnelClass::Eoip, &normalize(&spec.tunnel), Some(spec.tunnel_id))
}

fn emit(class: TunnelClass, spec: &TunnelSpec, tunnel_id: Option<u32>) -> ScriptDocument {
    let command = CommandBuilder::new("add")
        .arg("name", &spec.name)
        .opt("tunnel-id", tunnel_id)
        .opt("local-address", spec.local_address)
        .opt("remote-address", spec.remote_address)
        .opt("mtu", spec.mtu)
        .opt("keepalive", spec.keepalive.as_deref())
        .opt_quoted("ipsec-secret", spec.ipsec_secret.as_deref())
        .opt_flag("allow-fast-path", spec.allow_fast_path)
        .opt("dscp", spec.dscp)
        .opt_flag("clamp-tcp-mss", spec.clamp_tcp_mss)
        .opt_quoted("comment", spec.comment.as_deref())
        .build();

    let mut fragment = ScriptDocument::new();
    fragment.push_command(class.section(), command);

    if let (Some(local), Some(_remote)) = (spec.local_address, spec.remote_address) {
        point_to_point_bundle(&mut fragment, class, &spec.name, local);
    }
    fragment
}

/// Emit the /30 addressing bundle for a tunnel whose both ends are known.
pub(crate) fn point_to_point_bundle(
    fragment: &mut ScriptDocument,
    class: TunnelClass,
    name: &str,
    local: Ipv4Addr,
) {
    let address = CommandBuilder::new("add")
        .arg("address", format!("{local}/30"))
        .arg("interface", name)
        .build();
    fragment.push_command(section::IP_ADDRESS, address);

    let generic = CommandBuilder::new("add")
        .arg("interface", name)
        .arg("list", "TUNNEL")
        .build();
    let specific = CommandBuilder::new("add")
        .arg("interface", name)
        .arg("list", class.list_name())
        .build();
    fragment.push_command(section::LIST_MEMBER, generic);
    fragment.push_command(section::LIST_MEMBER, specific);

    let network = slash30_network(local);
    let list_entry = CommandBuilder::new("add")
        .arg("address", format!("{network}/30"))
        .arg("list", "tunnel-nets")
        .quoted("comment", name)
        .build();
    fragment.push_command(section::ADDRESS_LIST, list_entry);
}

/// Network address of the /30 containing `address`.
pub(crate) fn slash30_network(address: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(address) & !0b11)
}
