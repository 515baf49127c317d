//! DNS interception and policy-based routing generator.
//!
//! Per upstream resolver this emits, index-aligned: a pinned host route, a
//! dedicated routing table and an output-chain mark-connection/mark-routing
//! pair for locally originated queries. Per LAN segment it emits the leak
//! prevention set: a DHCP-network override pointing clients at the router,
//! a destination-NAT redirect pair (udp and tcp) for port-53 traffic not
//! aimed at the router, and an input-accept / forward-drop filter pair. All
//! per-resolver commands for index i precede those for i+1, and likewise
//! for segments.

use script_doc_core::ScriptDocument;

use super::CommandBuilder;
use crate::section;
use crate::state::{DnsPolicy, LanSegment, ResolverSpec};

/// Build the complete DNS policy fragment.
pub fn generate(policy: &DnsPolicy) -> ScriptDocument {
    let mut fragment = ScriptDocument::new();

    if !policy.resolvers.is_empty() {
        let servers: Vec<String> = policy
            .resolvers
            .iter()
            .map(|r| r.address.to_string())
            .collect();
        let command = CommandBuilder::new("set")
            .flag("allow-remote-requests", true)
            .arg("servers", servers.join(","))
            .build();
        fragment.push_command(section::DNS, command);
    }

    for (index, resolver) in policy.resolvers.iter().enumerate() {
        emit_resolver(&mut fragment, index + 1, resolver);
    }
    for segment in &policy.lan {
        emit_segment(&mut fragment, segment);
    }
    fragment
}

fn emit_resolver(fragment: &mut ScriptDocument, index: usize, resolver: &ResolverSpec) {
    let table = format!("dns-{index}");
    let connection_mark = format!("dns-{index}-conn");

    let route = CommandBuilder::new("add")
        .arg("dst-address", format!("{}/32", resolver.address))
        .arg("gateway", &resolver.egress)
        .quoted("comment", &format!("dns-{index} pin"))
        .build();
    fragment.push_command(section::ROUTE, route);

    // `fib` is a bare keyword, not a key=value parameter.
    fragment.push_command(section::ROUTING_TABLE, format!("add name={table} fib"));

    let mark_connection = CommandBuilder::new("add")
        .arg("chain", "output")
        .arg("action", "mark-connection")
        .arg("dst-address", resolver.address)
        .arg("protocol", "udp")
        .arg("dst-port", 53)
        .arg("new-connection-mark", &connection_mark)
        .flag("passthrough", true)
        .quoted("comment", &format!("dns-{index} resolver mark"))
        .build();
    let mark_routing = CommandBuilder::new("add")
        .arg("chain", "output")
        .arg("action", "mark-routing")
        .arg("connection-mark", &connection_mark)
        .arg("new-routing-mark", &table)
        .flag("passthrough", false)
        .quoted("comment", &format!("dns-{index} resolver route"))
        .build();
    fragment.push_command(section::MANGLE, mark_connection);
    fragment.push_command(section::MANGLE, mark_routing);
}

fn emit_segment(fragment: &mut ScriptDocument, segment: &LanSegment) {
    let override_dns = CommandBuilder::new(format!("set [ find address={} ]", segment.network))
        .arg("dns-server", segment.router_address)
        .build();
    fragment.push_command(section::DHCP_SERVER_NETWORK, override_dns);

    for protocol in ["udp", "tcp"] {
        let redirect = CommandBuilder::new("add")
            .arg("chain", "dstnat")
            .arg("action", "redirect")
            .arg("to-ports", 53)
            .arg("protocol", protocol)
            .arg("src-address", &segment.network)
            .arg("dst-address", format!("!{}", segment.router_address))
            .arg("dst-port", 53)
            .quoted("comment", &format!("dns-redirect {} {protocol}", segment.network))
            .build();
        fragment.push_command(section::NAT, redirect);
    }

    let accept = CommandBuilder::new("add")
        .arg("chain", "input")
        .arg("action", "accept")
        .arg("protocol", "udp")
        .arg("dst-port", 53)
        .arg("src-address", &segment.network)
        .arg("dst-address", segment.router_address)
        .quoted("comment", &format!("accept router dns {}", segment.network))
        .build();
    let drop = CommandBuilder::new("add")
        .arg("chain", "forward")
        .arg("action", "drop")
        .arg("protocol", "udp")
        .arg("dst-port", 53)
        .arg("src-address", &segment.network)
        .quoted("comment", &format!("drop stray dns {}", segment.network))
        .build();
    fragment.push_command(section::FILTER, accept);
    fragment.push_command(section::FILTER, drop);
}
