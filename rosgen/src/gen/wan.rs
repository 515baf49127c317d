//! WAN uplink generator.
//!
//! Each configured link contributes: one interface configuration command
//! (station-mode SSID/passphrase for wireless, an identifying comment for
//! wired), one DHCP client whose embedded script rewrites the static route
//! matched by a fixed comment to the freshly learned gateway, and two
//! interface-list memberships (generic `WAN` plus the link-specific list).

use script_doc_core::ScriptDocument;

use super::dhcp_client::{self, DhcpClientOptions};
use super::CommandBuilder;
use crate::error::ValidationError;
use crate::section;
use crate::state::{WanConfig, WanLink, WanMedia};

/// Comment key of the static route a link's DHCP script rewrites.
pub fn route_comment(link_name: &str) -> String {
    format!("route-{link_name}")
}

/// Build fragments for both links. Absent links contribute nothing.
pub fn generate(config: &WanConfig) -> Result<ScriptDocument, ValidationError> {
    let mut fragment = ScriptDocument::new();
    if let Some(link) = &config.primary {
        emit_link(&mut fragment, link, "WAN1")?;
    }
    if let Some(link) = &config.secondary {
        emit_link(&mut fragment, link, "WAN2")?;
    }
    Ok(fragment)
}

fn emit_link(
    fragment: &mut ScriptDocument,
    link: &WanLink,
    name: &str,
) -> Result<(), ValidationError> {
    if let Some(mac) = &link.mac_clone {
        crate::validate::ensure_mac(mac)?;
    }

    match &link.media {
        WanMedia::Wireless { ssid, passphrase } => {
            let command = CommandBuilder::new(set_target(&link.interface))
                .arg("configuration.mode", "station")
                .quoted("configuration.ssid", ssid)
                .quoted("security.passphrase", passphrase)
                .opt("mac-address", link.mac_clone.as_deref())
                .flag("disabled", false)
                .build();
            fragment.push_command(section::WIFI, command);
        }
        WanMedia::Wired => {
            let command = CommandBuilder::new(set_target(&link.interface))
                .opt("mac-address", link.mac_clone.as_deref())
                .quoted("comment", &format!("{name} uplink"))
                .build();
            fragment.push_command(section::ETHERNET, command);
        }
    }

    fragment.merge_from(&dhcp_client::generate(&DhcpClientOptions {
        interface: link.interface.clone(),
        add_default_route: false,
        use_peer_dns: false,
        use_peer_ntp: false,
        comment: Some(name.to_string()),
        script: Some(gateway_rewrite_script(name)),
        ..Default::default()
    }));

    let generic = CommandBuilder::new("add")
        .arg("interface", &link.interface)
        .arg("list", "WAN")
        .quoted("comment", name)
        .build();
    let specific = CommandBuilder::new("add")
        .arg("interface", &link.interface)
        .arg("list", name)
        .build();
    fragment.push_command(section::LIST_MEMBER, generic);
    fragment.push_command(section::LIST_MEMBER, specific);
    Ok(())
}

fn set_target(interface: &str) -> String {
    format!("set [ find default-name={interface} ]")
}

/// DHCP activation script: on bind, point the link's static route (found by
/// its fixed comment) at the learned gateway.
fn gateway_rewrite_script(name: &str) -> String {
    format!(
        ":if ($bound=1) do={{/ip route set [ find comment=\"{}\" ] gateway=$\"gateway-address\"}}",
        route_comment(name)
    )
}
