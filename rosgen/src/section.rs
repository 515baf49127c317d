//! RouterOS menu paths used as section names of the compiled document.

pub const IDENTITY: &str = "/system identity";
pub const ETHERNET: &str = "/interface ethernet";
pub const WIFI: &str = "/interface wifi";
pub const VLAN: &str = "/interface vlan";
pub const IPIP: &str = "/interface ipip";
pub const EOIP: &str = "/interface eoip";
pub const GRE: &str = "/interface gre";
pub const VXLAN: &str = "/interface vxlan";
pub const VXLAN_VTEPS: &str = "/interface vxlan vteps";
pub const LIST_MEMBER: &str = "/interface list member";
pub const IP_ADDRESS: &str = "/ip address";
pub const DHCP_CLIENT: &str = "/ip dhcp-client";
pub const DHCP_SERVER_NETWORK: &str = "/ip dhcp-server network";
pub const DNS: &str = "/ip dns";
pub const ROUTE: &str = "/ip route";
pub const ROUTING_TABLE: &str = "/routing table";
pub const ADDRESS_LIST: &str = "/ip firewall address-list";
pub const MANGLE: &str = "/ip firewall mangle";
pub const NAT: &str = "/ip firewall nat";
pub const FILTER: &str = "/ip firewall filter";
pub const SERVICE: &str = "/ip service";
pub const MAC_SERVER: &str = "/tool mac-server";
pub const SCRIPT: &str = "/system script";
pub const SCHEDULER: &str = "/system scheduler";

/// Sections whose entries the sorter is allowed to reorder.
pub const SORTED_SECTIONS: [&str; 2] = [MANGLE, FILTER];
