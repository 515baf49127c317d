//! Automation script generators.
//!
//! Each automation feature emits a named `/system script` body carrying its
//! own conditional logic plus a `/system scheduler` entry invoking it. The
//! generators emit script source text only; nothing is executed here, and
//! the bodies are single-line so the rendered script stays one command per
//! line.

use script_doc_core::ScriptDocument;

use super::CommandBuilder;
use crate::section;
use crate::state::{AutomationConfig, CertRenewSpec, CgnatCheckSpec, LocalCaSpec};

/// Build fragments for every configured automation feature.
pub fn generate(config: &AutomationConfig) -> ScriptDocument {
    let mut fragment = ScriptDocument::new();
    if let Some(spec) = &config.cert_renew {
        emit_cert_renew(&mut fragment, spec);
    }
    if let Some(spec) = &config.local_ca {
        emit_local_ca(&mut fragment, spec);
    }
    if let Some(spec) = &config.cgnat_check {
        emit_cgnat_check(&mut fragment, spec);
    }
    fragment
}

fn emit_cert_renew(fragment: &mut ScriptDocument, spec: &CertRenewSpec) {
    let source = format!(
        ":foreach c in=[/certificate find] do={{:if ([/certificate get $c days-valid] < {days}) do={{/certificate renew $c; :log info (\"renewed certificate \" . [/certificate get $c name])}}}}",
        days = spec.days_before
    );
    push_script(fragment, "cert-renew", &source);
    push_schedule(fragment, "cert-renew", &spec.interval);
}

fn emit_local_ca(fragment: &mut ScriptDocument, spec: &LocalCaSpec) {
    let common_name = spec.common_name.as_deref().unwrap_or(&spec.name);
    let source = format!(
        ":if ([:len [/certificate find where name=\"{name}\"]] = 0) do={{/certificate add name={name} common-name=\"{common_name}\" key-usage=key-cert-sign,crl-sign; /certificate sign {name}; :log info \"issued local CA {name}\"}}",
        name = spec.name
    );
    push_script(fragment, "issue-local-ca", &source);
    // Run once shortly after boot; the script is a no-op when the CA exists.
    let schedule = CommandBuilder::new("add")
        .arg("name", "issue-local-ca")
        .arg("start-time", "startup")
        .arg("interval", "0")
        .arg("on-event", "issue-local-ca")
        .build();
    fragment.push_command(section::SCHEDULER, schedule);
}

fn emit_cgnat_check(fragment: &mut ScriptDocument, spec: &CgnatCheckSpec) {
    // 100.64.0.0/10 means the second octet sits in 64..=127.
    let source = format!(
        ":local addr [/ip address get [find interface={iface} dynamic] address]; :if ($addr ~ \"^100\\\\.(6[4-9]|[7-9][0-9]|1[01][0-9]|12[0-7])\\\\.\") do={{:log warning (\"CGNAT detected on {iface}: \" . $addr)}}",
        iface = spec.interface
    );
    push_script(fragment, "cgnat-check", &source);
    push_schedule(fragment, "cgnat-check", &spec.interval);
}

fn push_script(fragment: &mut ScriptDocument, name: &str, source: &str) {
    let command = CommandBuilder::new("add")
        .arg("name", name)
        .quoted("source", source)
        .build();
    fragment.push_command(section::SCRIPT, command);
}

fn push_schedule(fragment: &mut ScriptDocument, name: &str, interval: &str) {
    let command = CommandBuilder::new("add")
        .arg("name", name)
        .arg("interval", interval)
        .arg("on-event", name)
        .build();
    fragment.push_command(section::SCHEDULER, command);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::generate;
    use crate::section;
    use crate::state::{AutomationConfig, CertRenewSpec, CgnatCheckSpec, LocalCaSpec};

    #[test]
    fn no_features_no_fragment() {
        assert!(generate(&AutomationConfig::default()).is_empty());
    }

    #[test]
    fn cert_renew_script_checks_remaining_days_and_schedules() {
        let fragment = generate(&AutomationConfig {
            cert_renew: Some(CertRenewSpec {
                days_before: 21,
                interval: "2d".to_string(),
            }),
            ..Default::default()
        });
        let script = &fragment.section(section::SCRIPT).expect("script")[0];
        assert!(script.starts_with("add name=cert-renew source=\""));
        assert!(script.contains("days-valid] < 21"));
        assert!(script.contains("/certificate renew"));
        assert_eq!(
            fragment.section(section::SCHEDULER),
            Some(&["add name=cert-renew interval=2d on-event=cert-renew".to_string()][..])
        );
    }

    #[test]
    fn local_ca_runs_once_at_startup() {
        let fragment = generate(&AutomationConfig {
            local_ca: Some(LocalCaSpec::default()),
            ..Default::default()
        });
        let script = &fragment.section(section::SCRIPT).expect("script")[0];
        assert!(script.contains("key-usage=key-cert-sign,crl-sign"));
        assert!(script.contains("local-ca"));
        assert_eq!(
            fragment.section(section::SCHEDULER),
            Some(
                &["add name=issue-local-ca start-time=startup interval=0 on-event=issue-local-ca"
                    .to_string()][..]
            )
        );
    }

    #[test]
    fn cgnat_check_targets_the_shared_address_space() {
        let fragment = generate(&AutomationConfig {
            cgnat_check: Some(CgnatCheckSpec {
                interface: "ether1".to_string(),
                interval: "1h".to_string(),
            }),
            ..Default::default()
        });
        let script = &fragment.section(section::SCRIPT).expect("script")[0];
        assert!(script.contains("interface=ether1"));
        assert!(script.contains("6[4-9]"));
        assert!(script.contains("12[0-7]"));
    }

    #[test]
    fn identical_config_yields_identical_fragments() {
        let config = AutomationConfig {
            cert_renew: Some(CertRenewSpec::default()),
            local_ca: Some(LocalCaSpec::default()),
            cgnat_check: None,
        };
        assert_eq!(generate(&config), generate(&config));
    }
}
