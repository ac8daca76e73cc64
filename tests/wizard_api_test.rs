//! Integration tests for the wizard public API.
//!
//! The interesting property here is a full re-run over an existing
//! configuration: a user pressing ENTER through every prompt must end up
//! with the same configuration they started with.

use anf_config::config::{load_config, save_config, MigrationConfig};
use anf_config::ui::MockUI;
use anf_config::wizard::SetupWizard;
use std::fs;
use tempfile::TempDir;

fn complete_config() -> MigrationConfig {
    let mut config = MigrationConfig::new();
    config.set_variable("azure_tenant_id", "12345678-1234-1234-1234-123456789abc");
    config.set_variable(
        "azure_subscription_id",
        "87654321-4321-4321-4321-cba987654321",
    );
    config.set_variable("target_location", "eastus");
    config.set_variable("target_resource_group", "rg-anf");
    config.set_variable("azure_app_id", "11111111-2222-3333-4444-555555555555");
    config.set_variable("azure_auth_base_url", "https://login.microsoftonline.com/");
    config.set_variable("azure_api_base_url", "https://management.azure.com/");
    config.set_variable("target_netapp_account", "anfacct");
    config.set_variable("target_capacity_pool", "pool1");
    config.set_variable("target_service_level", "Premium");
    config.set_variable("target_subnet_id", "/subscriptions/x/subnets/y");
    config.set_variable("target_volume_name", "vol1");
    config.set_variable(
        "target_usage_threshold",
        (100u128 * 1024 * 1024 * 1024).to_string(),
    );
    config.set_variable("target_protocol_types", "NFSv3");
    config.set_variable("target_throughput_mibps", "");
    config.set_variable("source_cluster_name", "cluster1");
    config.set_variable("source_hostname", "10.1.1.1");
    config.set_variable("source_server_name", "svm1");
    config.set_variable("source_volume_name", "srcvol");
    config.set_variable("source_peer_addresses", r#"["10.0.0.1","10.0.0.2"]"#);
    config.set_variable("replication_schedule", "Daily");
    config.set_variable("azure_api_version", "2024-03-01");
    config.set_variable("target_is_large_volume", "false");
    config.set_variable("target_network_features", "Standard");
    config.set_secret("azure_app_secret", "s3cret");
    config
}

#[test]
fn rerun_with_all_defaults_preserves_configuration() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    let existing = complete_config();
    save_config(&existing, &path).unwrap();

    // No queued responses: every input is ENTER and every confirm takes
    // its default, which keeps existing values throughout.
    let mut ui = MockUI::new();
    let wizard = SetupWizard::new(&path);
    assert!(wizard.run(&mut ui).unwrap());

    let saved = load_config(&path).unwrap();
    assert_eq!(saved, existing);
}

#[test]
fn rerun_can_change_a_single_field() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    save_config(&complete_config(), &path).unwrap();

    let mut ui = MockUI::new();
    ui.queue_input("target_volume_name", &["vol2"]);

    let wizard = SetupWizard::new(&path);
    assert!(wizard.run(&mut ui).unwrap());

    let saved = load_config(&path).unwrap();
    assert_eq!(saved.variable("target_volume_name"), "vol2");
    assert_eq!(saved.variable("target_location"), "eastus");
    assert_eq!(saved.secret("azure_app_secret"), "s3cret");
}

#[test]
fn rerun_replaces_peer_addresses_when_discarded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    save_config(&complete_config(), &path).unwrap();

    let mut ui = MockUI::new();
    ui.queue_confirm("keep_peers", &[false]);
    ui.queue_input("peer_ip", &["172.16.0.9", ""]);

    let wizard = SetupWizard::new(&path);
    assert!(wizard.run(&mut ui).unwrap());

    let saved = load_config(&path).unwrap();
    assert_eq!(saved.variable("source_peer_addresses"), "172.16.0.9");
}

#[test]
fn cancelled_rerun_leaves_saved_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    save_config(&complete_config(), &path).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let mut ui = MockUI::new();
    ui.queue_input("target_volume_name", &["vol2"]);
    ui.queue_confirm("save_config", &[false]);

    let wizard = SetupWizard::new(&path);
    assert!(!wizard.run(&mut ui).unwrap());

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert!(!temp.path().join("backups").exists());
}
