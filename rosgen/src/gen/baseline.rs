//! Firewall and service hardening baseline generator.

use script_doc_core::ScriptDocument;

use super::CommandBuilder;
use crate::section;
use crate::state::HardeningSpec;

/// Build the security baseline fragment: input-chain protection, plaintext
/// service shutdown and MAC-access restriction to the LAN list.
pub fn generate(spec: &HardeningSpec) -> ScriptDocument {
    let mut fragment = ScriptDocument::new();

    let rules = [
        CommandBuilder::new("add")
            .arg("chain", "input")
            .arg("action", "accept")
            .arg("connection-state", "established,related")
            .quoted("comment", "accept established/related")
            .build(),
        CommandBuilder::new("add")
            .arg("chain", "input")
            .arg("action", "drop")
            .arg("connection-state", "invalid")
            .quoted("comment", "drop invalid state")
            .build(),
        CommandBuilder::new("add")
            .arg("chain", "input")
            .arg("action", "accept")
            .arg("protocol", "icmp")
            .quoted("comment", "accept icmp")
            .build(),
        CommandBuilder::new("add")
            .arg("chain", "input")
            .arg("action", "drop")
            .arg("in-interface-list", &spec.wan_list)
            .quoted("comment", &format!("drop unsolicited {} input", spec.wan_list))
            .build(),
    ];
    fragment.extend_section(section::FILTER, rules);

    for service in &spec.disable_services {
        let command = CommandBuilder::new(format!("set {service}"))
            .flag("disabled", true)
            .build();
        fragment.push_command(section::SERVICE, command);
    }

    let mac_server = CommandBuilder::new("set")
        .arg("allowed-interface-list", &spec.lan_list)
        .build();
    fragment.push_command(section::MAC_SERVER, mac_server);
    fragment
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::generate;
    use crate::section;
    use crate::state::HardeningSpec;

    #[test]
    fn default_baseline_guards_input_and_services() {
        let fragment = generate(&HardeningSpec::default());

        let filter = fragment.section(section::FILTER).expect("filter");
        assert_eq!(filter.len(), 4);
        assert!(filter[0].contains("connection-state=established,related"));
        assert!(filter[3].contains("in-interface-list=WAN"));

        assert_eq!(
            fragment.section(section::SERVICE),
            Some(
                &[
                    "set telnet disabled=yes".to_string(),
                    "set ftp disabled=yes".to_string(),
                    "set www disabled=yes".to_string(),
                ][..]
            )
        );
        assert_eq!(
            fragment.section(section::MAC_SERVER),
            Some(&["set allowed-interface-list=LAN".to_string()][..])
        );
    }

    #[test]
    fn custom_lists_flow_into_commands() {
        let fragment = generate(&HardeningSpec {
            wan_list: "UPLINKS".to_string(),
            lan_list: "TRUSTED".to_string(),
            disable_services: vec!["api".to_string()],
        });
        let filter = fragment.section(section::FILTER).expect("filter");
        assert!(filter[3].contains("in-interface-list=UPLINKS"));
        assert_eq!(
            fragment.section(section::SERVICE),
            Some(&["set api disabled=yes".to_string()][..])
        );
        assert_eq!(
            fragment.section(section::MAC_SERVER),
            Some(&["set allowed-interface-list=TRUSTED".to_string()][..])
        );
    }
}
