use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

const TWO_WAN_STATE: &str = r#"{
    "identity": "edge-router",
    "wan": {
        "primary": { "interface": "ether1" },
        "secondary": {
            "interface": "wifi1",
            "media": { "kind": "wireless", "ssid": "X", "passphrase": "Y" }
        }
    }
}"#;

#[test]
fn compile_prints_script_with_trailer() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("state.json");
    fs::write(&state, TWO_WAN_STATE).expect("write state");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rosgen"));
    cmd.arg("compile")
        .arg(path_as_str(&state))
        .assert()
        .success()
        .stdout(predicate::str::contains("add interface=ether1 list=WAN1"))
        .stdout(predicate::str::contains("add interface=wifi1 list=WAN2"))
        .stdout(predicate::str::contains(
            r#"configuration.ssid="X" security.passphrase="Y""#,
        ))
        .stdout(predicate::str::ends_with(":delay 60\n/system reboot\n"));
}

#[test]
fn compile_writes_output_file() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("state.json");
    let output = dir.path().join("edge.rsc");
    fs::write(&state, TWO_WAN_STATE).expect("write state");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rosgen"));
    cmd.arg("compile")
        .arg(path_as_str(&state))
        .arg("--output")
        .arg(path_as_str(&output))
        .assert()
        .success();

    let script = fs::read_to_string(&output).expect("read script");
    assert!(script.contains("/ip dhcp-client"));
    assert!(script.ends_with(":delay 60\n/system reboot\n"));
}

#[test]
fn compile_accepts_toml_state() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("state.toml");
    fs::write(
        &state,
        r#"
[[vlans]]
id = 30
interface = "bridge1"
"#,
    )
    .expect("write state");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rosgen"));
    cmd.arg("compile")
        .arg(path_as_str(&state))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "add interface=bridge1 name=vlan30 vlan-id=30",
        ));
}

#[test]
fn invalid_vlan_id_fails_with_no_script() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("state.json");
    fs::write(
        &state,
        r#"{"vlans":[{"id":4095,"interface":"bridge1"}]}"#,
    )
    .expect("write state");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rosgen"));
    cmd.arg("compile")
        .arg(path_as_str(&state))
        .assert()
        .failure()
        .stderr(predicate::str::contains("VLAN id 4095"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_reports_ok_for_valid_state() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("state.json");
    fs::write(&state, TWO_WAN_STATE).expect("write state");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rosgen"));
    cmd.arg("check")
        .arg(path_as_str(&state))
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"))
        .stdout(predicate::str::contains("sections="));
}

#[test]
fn check_fails_on_unicast_vxlan_without_vtep() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("state.json");
    fs::write(
        &state,
        r#"{"tunnels":{"vxlan":[{"name":"vx-a","vni":100}]}}"#,
    )
    .expect("write state");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rosgen"));
    cmd.arg("check")
        .arg(path_as_str(&state))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unicast BUM mode"));
}

#[test]
fn sections_json_lists_compiled_sections() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("state.json");
    fs::write(&state, TWO_WAN_STATE).expect("write state");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rosgen"));
    let output = cmd
        .arg("sections")
        .arg(path_as_str(&state))
        .arg("--format")
        .arg("json")
        .output()
        .expect("command output");
    assert!(output.status.success());

    let parsed: Value =
        serde_json::from_slice(&output.stdout).expect("json document");
    let names: Vec<&str> = parsed["sections"]
        .as_array()
        .expect("sections array")
        .iter()
        .map(|s| s["name"].as_str().expect("name"))
        .collect();
    assert!(names.contains(&"/ip dhcp-client"));
    assert!(names.contains(&"/interface list member"));
}

#[test]
fn unknown_state_extension_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("state.yaml");
    fs::write(&state, "{}").expect("write state");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rosgen"));
    cmd.arg("compile")
        .arg(path_as_str(&state))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported state file extension"));
}
