//! `/ip dhcp-client` entry generator.

use script_doc_core::ScriptDocument;

use super::CommandBuilder;
use crate::section;

/// Options for one DHCP client entry.
///
/// Booleans always render as `yes`/`no`; optional strings are appended only
/// when present, in the fixed parameter order of [`generate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DhcpClientOptions {
    pub interface: String,
    pub add_default_route: bool,
    pub default_route_distance: Option<u8>,
    pub use_peer_dns: bool,
    pub use_peer_ntp: bool,
    pub dhcp_options: Option<String>,
    pub client_id: Option<String>,
    pub hostname: Option<String>,
    pub comment: Option<String>,
    pub script: Option<String>,
    pub disabled: bool,
}

/// Build the single `add` command for one DHCP client.
pub fn generate(options: &DhcpClientOptions) -> ScriptDocument {
    let command = CommandBuilder::new("add")
        .arg("interface", &options.interface)
        .flag("add-default-route", options.add_default_route)
        .opt("default-route-distance", options.default_route_distance)
        .flag("use-peer-dns", options.use_peer_dns)
        .flag("use-peer-ntp", options.use_peer_ntp)
        .opt_quoted("dhcp-options", options.dhcp_options.as_deref())
        .opt_quoted("client-id", options.client_id.as_deref())
        .opt_quoted("hostname", options.hostname.as_deref())
        .opt_quoted("comment", options.comment.as_deref())
        .opt_quoted("script", options.script.as_deref())
        .flag("disabled", options.disabled)
        .build();

    let mut fragment = ScriptDocument::new();
    fragment.push_command(section::DHCP_CLIENT, command);
    fragment
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{generate, DhcpClientOptions};
    use crate::section;

    #[test]
    fn booleans_always_render_and_options_keep_order() {
        let fragment = generate(&DhcpClientOptions {
            interface: "ether1".to_string(),
            hostname: Some("edge".to_string()),
            ..Default::default()
        });
        assert_eq!(
            fragment.section(section::DHCP_CLIENT),
            Some(
                &[concat!(
                    "add interface=ether1 add-default-route=no use-peer-dns=no ",
                    r#"use-peer-ntp=no hostname="edge" disabled=no"#
                )
                .to_string()][..]
            )
        );
    }

    #[test]
    fn full_option_set_renders_in_fixed_order() {
        let fragment = generate(&DhcpClientOptions {
            interface: "ether2".to_string(),
            add_default_route: true,
            default_route_distance: Some(2),
            use_peer_dns: true,
            use_peer_ntp: true,
            dhcp_options: Some("clientid".to_string()),
            client_id: Some("01:aa".to_string()),
            hostname: Some("edge".to_string()),
            comment: Some("WAN2".to_string()),
            script: Some(":log info done".to_string()),
            disabled: true,
        });
        assert_eq!(
            fragment.section(section::DHCP_CLIENT),
            Some(
                &[concat!(
                    "add interface=ether2 add-default-route=yes default-route-distance=2 ",
                    r#"use-peer-dns=yes use-peer-ntp=yes dhcp-options="clientid" client-id="01:aa" "#,
                    r#"hostname="edge" comment="WAN2" script=":log info done" disabled=yes"#
                )
                .to_string()][..]
            )
        );
    }
}
