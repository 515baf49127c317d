//! Desired network state consumed by the compiler.
//!
//! The hosting application (wizard UI, CLI front-end) builds one immutable
//! [`DesiredState`] value per compile call. Generators read only the slice
//! they need and never mutate it. Every field has a serde default so partial
//! documents parse; an absent feature compiles to an empty fragment rather
//! than an error.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Complete desired state for one compile call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DesiredState {
    /// Router identity, used only in generated comments.
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub wan: WanConfig,
    #[serde(default)]
    pub vlans: Vec<VlanSpec>,
    #[serde(default)]
    pub tunnels: TunnelSet,
    #[serde(default)]
    pub dns: Option<DnsPolicy>,
    #[serde(default)]
    pub automation: AutomationConfig,
    #[serde(default)]
    pub hardening: Option<HardeningSpec>,
}

/// Up to two uplinks; the primary is named WAN1, the secondary WAN2.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WanConfig {
    #[serde(default)]
    pub primary: Option<WanLink>,
    #[serde(default)]
    pub secondary: Option<WanLink>,
}

/// One uplink, wired or wireless.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WanLink {
    /// Device interface the uplink uses, e.g. `ether1` or `wifi1`.
    pub interface: String,
    #[serde(default)]
    pub media: WanMedia,
    /// Optional MAC address to present upstream (some ISPs pin the lease).
    #[serde(default)]
    pub mac_clone: Option<String>,
}

/// Physical flavor of a WAN link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WanMedia {
    #[default]
    Wired,
    Wireless { ssid: String, passphrase: String },
}

/// One VLAN interface to create.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VlanSpec {
    pub id: u32,
    /// Parent interface carrying the tagged traffic.
    pub interface: String,
    /// Interface name; defaults to `vlan<id>` when absent.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// All overlay tunnels, grouped by class.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TunnelSet {
    #[serde(default)]
    pub ipip: Vec<TunnelSpec>,
    #[serde(default)]
    pub eoip: Vec<EoipSpec>,
    #[serde(default)]
    pub gre: Vec<TunnelSpec>,
    #[serde(default)]
    pub vxlan: Vec<VxlanSpec>,
}

/// Point-to-point tunnel specification shared by IPIP, EoIP and GRE.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TunnelSpec {
    pub name: String,
    #[serde(default)]
    pub local_address: Option<Ipv4Addr>,
    #[serde(default)]
    pub remote_address: Option<Ipv4Addr>,
    #[serde(default)]
    pub mtu: Option<u16>,
    /// Keepalive in RouterOS syntax, e.g. `10s,10`.
    #[serde(default)]
    pub keepalive: Option<String>,
    #[serde(default)]
    pub ipsec_secret: Option<String>,
    #[serde(default)]
    pub allow_fast_path: Option<bool>,
    #[serde(default)]
    pub dscp: Option<u8>,
    #[serde(default)]
    pub clamp_tcp_mss: Option<bool>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// EoIP tunnel: the shared point-to-point fields plus the mandatory id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EoipSpec {
    #[serde(flatten)]
    pub tunnel: TunnelSpec,
    pub tunnel_id: u32,
}

/// Broadcast/unknown-unicast/multicast handling of a VXLAN overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BumMode {
    /// Flood via the configured VTEP list; requires at least one VTEP.
    #[default]
    Unicast,
    /// Flood via a multicast group; tolerates an empty VTEP list.
    Multicast,
}

/// One VXLAN overlay interface.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VxlanSpec {
    pub name: String,
    pub vni: u32,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub local_address: Option<Ipv4Addr>,
    /// Single far-end address; used to synthesize a default VTEP when the
    /// explicit VTEP list is empty.
    #[serde(default)]
    pub remote_address: Option<Ipv4Addr>,
    #[serde(default)]
    pub mtu: Option<u16>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub bum_mode: BumMode,
    #[serde(default)]
    pub vteps: Vec<VtepPeer>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// One VXLAN far-end peer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VtepPeer {
    pub remote: Ipv4Addr,
    #[serde(default)]
    pub comment: Option<String>,
}

/// DNS interception and policy-based routing of resolver traffic.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DnsPolicy {
    #[serde(default)]
    pub resolvers: Vec<ResolverSpec>,
    #[serde(default)]
    pub lan: Vec<LanSegment>,
}

/// One upstream resolver and the egress its traffic is pinned to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResolverSpec {
    pub address: Ipv4Addr,
    /// Gateway or interface the resolver's traffic must leave through.
    pub egress: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// One LAN segment whose clients are forced through the router for DNS.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LanSegment {
    /// Segment network in CIDR form, e.g. `192.168.88.0/24`.
    pub network: String,
    /// Router address inside the segment; the only allowed DNS target.
    pub router_address: Ipv4Addr,
}

/// Automation scripts and their schedules.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AutomationConfig {
    #[serde(default)]
    pub cert_renew: Option<CertRenewSpec>,
    #[serde(default)]
    pub local_ca: Option<LocalCaSpec>,
    #[serde(default)]
    pub cgnat_check: Option<CgnatCheckSpec>,
}

/// Renew certificates before they run out.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CertRenewSpec {
    /// Renew when fewer than this many valid days remain.
    #[serde(default = "default_renew_days")]
    pub days_before: u16,
    /// Scheduler interval in RouterOS syntax.
    #[serde(default = "default_renew_interval")]
    pub interval: String,
}

impl Default for CertRenewSpec {
    fn default() -> Self {
        Self {
            days_before: default_renew_days(),
            interval: default_renew_interval(),
        }
    }
}

fn default_renew_days() -> u16 {
    14
}

fn default_renew_interval() -> String {
    "1d".to_string()
}

/// Issue and self-sign a local certificate authority once.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocalCaSpec {
    #[serde(default = "default_ca_name")]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
}

impl Default for LocalCaSpec {
    fn default() -> Self {
        Self {
            name: default_ca_name(),
            common_name: None,
        }
    }
}

fn default_ca_name() -> String {
    "local-ca".to_string()
}

/// Periodically check whether the uplink address sits behind carrier NAT.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CgnatCheckSpec {
    /// Uplink interface whose address is inspected.
    pub interface: String,
    #[serde(default = "default_cgnat_interval")]
    pub interval: String,
}

fn default_cgnat_interval() -> String {
    "1h".to_string()
}

/// Firewall and service hardening baseline.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HardeningSpec {
    #[serde(default = "default_wan_list")]
    pub wan_list: String,
    #[serde(default = "default_lan_list")]
    pub lan_list: String,
    /// Plaintext management services to disable.
    #[serde(default = "default_disabled_services")]
    pub disable_services: Vec<String>,
}

impl Default for HardeningSpec {
    fn default() -> Self {
        Self {
            wan_list: default_wan_list(),
            lan_list: default_lan_list(),
            disable_services: default_disabled_services(),
        }
    }
}

fn default_wan_list() -> String {
    "WAN".to_string()
}

fn default_lan_list() -> String {
    "LAN".to_string()
}

fn default_disabled_services() -> Vec<String> {
    ["telnet", "ftp", "www"].iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_parses_to_defaults() {
        let state: DesiredState = serde_json::from_str("{}").expect("parse");
        assert_eq!(state, DesiredState::default());
        assert!(state.wan.primary.is_none());
        assert!(state.tunnels.vxlan.is_empty());
    }

    #[test]
    fn wireless_wan_link_parses_from_toml() {
        let raw = r#"
            [wan.primary]
            interface = "wifi1"
            media = { kind = "wireless", ssid = "uplink", passphrase = "hunter22" }
        "#;
        let state: DesiredState = toml::from_str(raw).expect("parse");
        let link = state.wan.primary.expect("primary link");
        assert_eq!(
            link.media,
            WanMedia::Wireless {
                ssid: "uplink".to_string(),
                passphrase: "hunter22".to_string()
            }
        );
    }

    #[test]
    fn eoip_flattens_shared_tunnel_fields() {
        let raw = r#"{"tunnels":{"eoip":[{"name":"eoip-dc","tunnel_id":7,"remote_address":"203.0.113.9"}]}}"#;
        let state: DesiredState = serde_json::from_str(raw).expect("parse");
        let eoip = &state.tunnels.eoip[0];
        assert_eq!(eoip.tunnel_id, 7);
        assert_eq!(eoip.tunnel.name, "eoip-dc");
        assert_eq!(
            eoip.tunnel.remote_address,
            Some("203.0.113.9".parse().unwrap())
        );
    }
}
