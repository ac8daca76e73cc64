//! Integration tests for the config, template, and drift public APIs.

use anf_config::config::{load_config, parse_config, save_config, MigrationConfig};
use anf_config::drift::{check, find_referenced_keys};
use anf_config::repair::repair;
use anf_config::template::{substitute, RenderMode};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let _config = MigrationConfig::default();
    let _mode = RenderMode::Body;
}

#[test]
fn save_load_render_pipeline() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");

    let mut config = MigrationConfig::new();
    config.set_variable("azure_subscription_id", "87654321-4321-4321-4321-cba987654321");
    config.set_variable("target_location", "eastus");
    config.set_variable("target_volume_name", "vol1");
    config.set_variable("source_peer_addresses", r#"["10.0.0.1","10.0.0.2"]"#);
    config.set_secret("azure_app_secret", "s3cret");
    save_config(&config, &path).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);

    let body = substitute(
        r#"{"location":"{{target_location}}","remotePath":{"peerAddresses":["{{source_peer_addresses}}"]}}"#,
        &loaded.merged(),
        RenderMode::Body,
    );
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["location"], "eastus");
    assert_eq!(
        parsed["remotePath"]["peerAddresses"],
        serde_json::json!(["10.0.0.1", "10.0.0.2"])
    );
}

#[test]
fn drift_check_against_scripts() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("workflow.sh"),
        "curl \"$API/{{target_location}}\" -H \"auth: {{azure_app_secret}}\" {{undefined_key}}\n",
    )
    .unwrap();

    let mut config = MigrationConfig::new();
    config.set_variable("target_location", "eastus");
    config.set_secret("azure_app_secret", "s3cret");

    let referenced = find_referenced_keys(&[temp.path().join("workflow.sh")]);
    let report = check(&config, &referenced);

    let present: BTreeSet<&str> = report.present.iter().map(String::as_str).collect();
    assert_eq!(
        present,
        ["azure_app_secret", "target_location"].into_iter().collect()
    );
    let missing: BTreeSet<&str> = report.missing.iter().map(String::as_str).collect();
    assert_eq!(missing, ["undefined_key"].into_iter().collect());
    assert!(report.has_drift());
}

#[test]
fn repaired_file_loads_cleanly() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(
        &path,
        "variables:\r\n\ttarget_location:westus2\r\nsecrets: {}\r\n",
    )
    .unwrap();

    assert!(load_config(&path).is_err());

    let outcome = repair(&path).unwrap();
    assert!(outcome.valid);

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.variable("target_location"), "westus2");
}

#[test]
fn parse_config_reports_source_path() {
    let err = parse_config("variables: [not-a-mapping\n", Path::new("weird.yaml")).unwrap_err();
    assert!(err.to_string().contains("weird.yaml"));
}
