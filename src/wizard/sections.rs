//! Wizard configuration sections.
//!
//! Each section reads defaults from the previously-loaded configuration and
//! writes collected values into the one being built. The accumulating
//! config is threaded through explicitly so every section can be exercised
//! in isolation with a scripted UI.

use crate::config::{
    validate_azure_region, validate_numeric, validate_protocol, validate_replication_schedule,
    validate_service_level, validate_uuid, MigrationConfig, SECRET_SENTINEL,
};
use crate::error::Result;
use crate::ui::UserInterface;

use super::peers::collect_peer_addresses;
use super::prompt::{prompt_field, Field};

/// Commercial cloud login endpoint.
pub const AUTH_URL_COMMERCIAL: &str = "https://login.microsoftonline.com/";
/// Government cloud login endpoint.
pub const AUTH_URL_GOVERNMENT: &str = "https://login.microsoftonline.us/";

const GIB: u128 = 1024 * 1024 * 1024;

/// Default volume size shown when no usable size is stored.
const DEFAULT_SIZE_GIB: u128 = 100;

/// Tenant, subscription, region, and resource group.
pub fn configure_azure_basics(
    ui: &mut dyn UserInterface,
    existing: &MigrationConfig,
    config: &mut MigrationConfig,
) -> Result<()> {
    ui.show_section("Azure Basics");

    let value = prompt_field(
        ui,
        &Field::required(
            "azure_tenant_id",
            "Azure AD Tenant ID",
            existing.variable("azure_tenant_id"),
        )
        .with_validator(validate_uuid),
    )?;
    config.set_variable("azure_tenant_id", value);

    let value = prompt_field(
        ui,
        &Field::required(
            "azure_subscription_id",
            "Azure Subscription ID",
            existing.variable("azure_subscription_id"),
        )
        .with_validator(validate_uuid),
    )?;
    config.set_variable("azure_subscription_id", value);

    let value = prompt_field(
        ui,
        &Field::required(
            "target_location",
            "Azure Region (e.g., eastus, westus2)",
            existing.variable("target_location"),
        )
        .with_validator(validate_azure_region),
    )?;
    config.set_variable("target_location", value);

    let value = prompt_field(
        ui,
        &Field::required(
            "target_resource_group",
            "Resource Group Name",
            existing.variable("target_resource_group"),
        ),
    )?;
    config.set_variable("target_resource_group", value);

    Ok(())
}

/// Service principal credentials and cloud endpoints.
pub fn configure_service_principal(
    ui: &mut dyn UserInterface,
    existing: &MigrationConfig,
    config: &mut MigrationConfig,
) -> Result<()> {
    ui.show_section("Service Principal Authentication");
    ui.message("You need a service principal with NetApp contributor permissions.");

    let value = prompt_field(
        ui,
        &Field::required(
            "azure_app_id",
            "Service Principal Application ID",
            existing.variable("azure_app_id"),
        )
        .with_validator(validate_uuid),
    )?;
    config.set_variable("azure_app_id", value);

    let current_secret = existing.secret("azure_app_secret");
    if !current_secret.is_empty() && current_secret != SECRET_SENTINEL {
        ui.success("Service principal secret already configured");
        if ui.confirm("keep_app_secret", "Keep existing secret?", true)? {
            config.set_secret("azure_app_secret", current_secret);
        } else {
            let value = prompt_field(
                ui,
                &Field::required("azure_app_secret", "Service Principal Secret", "").secret(),
            )?;
            config.set_secret("azure_app_secret", value);
        }
    } else {
        let value = prompt_field(
            ui,
            &Field::required("azure_app_secret", "Service Principal Secret", "").secret(),
        )?;
        config.set_secret("azure_app_secret", value);
    }

    config.set_variable(
        "azure_auth_base_url",
        prompt_auth_url(ui, existing.variable("azure_auth_base_url"))?,
    );

    let value = prompt_field(
        ui,
        &Field::required(
            "azure_api_base_url",
            "Azure Management API URL",
            existing.variable("azure_api_base_url"),
        ),
    )?;
    config.set_variable("azure_api_base_url", value);

    Ok(())
}

/// Numbered auth endpoint selection with a custom-URL escape hatch.
fn prompt_auth_url(ui: &mut dyn UserInterface, current_url: &str) -> Result<String> {
    let current_choice = if current_url.contains("login.microsoftonline.com") {
        "1"
    } else if current_url.contains("login.microsoftonline.us") {
        "2"
    } else if current_url.is_empty() {
        "1"
    } else {
        "3"
    };

    ui.message("Auth URL Options:");
    ui.message(&format!("  1. Commercial (default) - {AUTH_URL_COMMERCIAL}"));
    ui.message(&format!("  2. Government - {AUTH_URL_GOVERNMENT}"));
    ui.message("  3. Other - specify custom URL");

    let choice = prompt_field(
        ui,
        &Field::required("auth_url_choice", "Select Auth URL (1/2/3)", current_choice),
    )?;

    let url = match choice.to_lowercase().as_str() {
        "1" | "commercial" => AUTH_URL_COMMERCIAL.to_string(),
        "2" | "government" => AUTH_URL_GOVERNMENT.to_string(),
        "3" | "other" => prompt_field(
            ui,
            &Field::required("azure_auth_base_url", "Custom Auth URL", current_url),
        )?,
        _ => AUTH_URL_COMMERCIAL.to_string(),
    };

    Ok(url)
}

/// NetApp account, capacity pool, service level, and subnet.
pub fn configure_netapp_resources(
    ui: &mut dyn UserInterface,
    existing: &MigrationConfig,
    config: &mut MigrationConfig,
) -> Result<()> {
    ui.show_section("Azure NetApp Files Resources");

    let value = prompt_field(
        ui,
        &Field::required(
            "target_netapp_account",
            "NetApp Account Name",
            existing.variable("target_netapp_account"),
        ),
    )?;
    config.set_variable("target_netapp_account", value);

    let value = prompt_field(
        ui,
        &Field::required(
            "target_capacity_pool",
            "Capacity Pool Name",
            existing.variable("target_capacity_pool"),
        ),
    )?;
    config.set_variable("target_capacity_pool", value);

    let value = prompt_field(
        ui,
        &Field::required(
            "target_service_level",
            "Service Level (Standard/Premium/Ultra)",
            existing.variable("target_service_level"),
        )
        .with_validator(validate_service_level),
    )?;
    config.set_variable("target_service_level", value);

    ui.message(
        "Volume subnet format: /subscriptions/{sub-id}/resourceGroups/{rg}/providers/Microsoft.Network/virtualNetworks/{vnet}/subnets/{subnet}",
    );
    let value = prompt_field(
        ui,
        &Field::required(
            "target_subnet_id",
            "Volume Subnet ID",
            existing.variable("target_subnet_id"),
        ),
    )?;
    config.set_variable("target_subnet_id", value);

    Ok(())
}

/// Destination volume, sizing, protocol, QoS, source cluster details,
/// peer addresses, and replication schedule.
pub fn configure_migration_settings(
    ui: &mut dyn UserInterface,
    existing: &MigrationConfig,
    config: &mut MigrationConfig,
) -> Result<()> {
    ui.show_section("Migration Configuration");

    let value = prompt_field(
        ui,
        &Field::required(
            "target_volume_name",
            "Destination Volume Name",
            existing.variable("target_volume_name"),
        ),
    )?;
    config.set_variable("target_volume_name", value);

    config.set_variable(
        "target_usage_threshold",
        prompt_volume_size(ui, existing.variable("target_usage_threshold"))?,
    );

    let value = prompt_field(
        ui,
        &Field::required(
            "target_protocol_types",
            "Protocol Type (NFSv3/NFSv4.1/CIFS)",
            existing.variable("target_protocol_types"),
        )
        .with_validator(validate_protocol),
    )?;
    config.set_variable("target_protocol_types", value);

    config.set_variable(
        "target_throughput_mibps",
        prompt_qos(ui, existing.variable("target_throughput_mibps"))?,
    );

    ui.message("Source ONTAP Cluster Information");

    let value = prompt_field(
        ui,
        &Field::required(
            "source_cluster_name",
            "Source Cluster Name",
            existing.variable("source_cluster_name"),
        ),
    )?;
    config.set_variable("source_cluster_name", value);

    let value = prompt_field(
        ui,
        &Field::required(
            "source_hostname",
            "Source External Host Name/IP",
            existing.variable("source_hostname"),
        ),
    )?;
    config.set_variable("source_hostname", value);

    let value = prompt_field(
        ui,
        &Field::required(
            "source_server_name",
            "Source Server/SVM Name",
            existing.variable("source_server_name"),
        ),
    )?;
    config.set_variable("source_server_name", value);

    let value = prompt_field(
        ui,
        &Field::required(
            "source_volume_name",
            "Source Volume Name",
            existing.variable("source_volume_name"),
        ),
    )?;
    config.set_variable("source_volume_name", value);

    let peers = collect_peer_addresses(ui, existing.variable("source_peer_addresses"))?;
    config.set_variable("source_peer_addresses", peers);

    let value = prompt_field(
        ui,
        &Field::required(
            "replication_schedule",
            "Replication Schedule (Hourly/Daily/Weekly)",
            existing.variable("replication_schedule"),
        )
        .with_validator(validate_replication_schedule),
    )?;
    config.set_variable("replication_schedule", value);

    Ok(())
}

/// Volume size collected in GiB, stored as a byte count.
fn prompt_volume_size(ui: &mut dyn UserInterface, current_bytes: &str) -> Result<String> {
    let current_gib = current_bytes
        .parse::<u128>()
        .map(|bytes| bytes / GIB)
        .unwrap_or(DEFAULT_SIZE_GIB);

    ui.message(&format!("Current size: {current_gib} GiB"));
    let current_display = current_gib.to_string();
    let value = prompt_field(
        ui,
        &Field::required("volume_size_gib", "Volume Size (GiB)", &current_display)
            .with_validator(validate_numeric),
    )?;

    let gib: u128 = value.parse().map_err(|_| crate::error::AnfError::ValidationError {
        message: format!("Volume size is not a number: {value}"),
    })?;
    Ok((gib * GIB).to_string())
}

/// QoS setting: `Auto` stores empty (automatic QoS), a number stores the
/// manual MiB/s figure.
fn prompt_qos(ui: &mut dyn UserInterface, current: &str) -> Result<String> {
    let current_display = if current.trim().is_empty() {
        "Auto".to_string()
    } else {
        current.to_string()
    };

    ui.message("QoS Options: Enter 'Auto' for automatic QoS, or a number (MiB/s) for manual QoS");
    let value = prompt_field(
        ui,
        &Field::required(
            "target_throughput_mibps",
            "QoS Setting (Auto or MiB/s number)",
            &current_display,
        ),
    )?;

    if value.eq_ignore_ascii_case("auto") {
        return Ok(String::new());
    }
    if value.parse::<f64>().is_ok() {
        return Ok(value);
    }

    ui.warning("Invalid QoS input. Using 'Auto' as fallback.");
    Ok(String::new())
}

/// API version, large-volume flag, and pinned network features.
pub fn configure_optional_settings(
    ui: &mut dyn UserInterface,
    existing: &MigrationConfig,
    config: &mut MigrationConfig,
) -> Result<()> {
    ui.show_section("Optional Settings");

    let value = prompt_field(
        ui,
        &Field::required(
            "azure_api_version",
            "API Version",
            existing.variable("azure_api_version"),
        ),
    )?;
    config.set_variable("azure_api_version", value);

    let value = prompt_field(
        ui,
        &Field::required(
            "target_is_large_volume",
            "Enable Large Volume Support (true/false)",
            existing.variable("target_is_large_volume"),
        ),
    )?;
    config.set_variable("target_is_large_volume", value.to_lowercase());

    config.set_variable("target_network_features", "Standard");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn azure_basics_collects_all_four_fields() {
        let mut ui = MockUI::new();
        ui.queue_input("azure_tenant_id", &["12345678-1234-1234-1234-123456789abc"]);
        ui.queue_input(
            "azure_subscription_id",
            &["87654321-4321-4321-4321-cba987654321"],
        );
        ui.queue_input("target_location", &["eastus"]);
        ui.queue_input("target_resource_group", &["rg-anf"]);

        let existing = MigrationConfig::new();
        let mut config = MigrationConfig::new();
        configure_azure_basics(&mut ui, &existing, &mut config).unwrap();

        assert_eq!(
            config.variable("azure_tenant_id"),
            "12345678-1234-1234-1234-123456789abc"
        );
        assert_eq!(config.variable("target_location"), "eastus");
        assert_eq!(config.variable("target_resource_group"), "rg-anf");
    }

    #[test]
    fn azure_basics_keeps_existing_on_empty_input() {
        let mut ui = MockUI::new();
        // All-empty input keeps every existing value.
        let mut existing = MigrationConfig::new();
        existing.set_variable("azure_tenant_id", "12345678-1234-1234-1234-123456789abc");
        existing.set_variable(
            "azure_subscription_id",
            "87654321-4321-4321-4321-cba987654321",
        );
        existing.set_variable("target_location", "westeurope");
        existing.set_variable("target_resource_group", "rg-old");

        let mut config = MigrationConfig::new();
        configure_azure_basics(&mut ui, &existing, &mut config).unwrap();

        assert_eq!(config.variable("target_location"), "westeurope");
        assert_eq!(config.variable("target_resource_group"), "rg-old");
    }

    #[test]
    fn service_principal_keeps_configured_secret() {
        let mut ui = MockUI::new();
        ui.queue_input("azure_app_id", &["12345678-1234-1234-1234-123456789abc"]);
        ui.queue_confirm("keep_app_secret", &[true]);
        ui.queue_input("auth_url_choice", &["1"]);
        ui.queue_input("azure_api_base_url", &["https://management.azure.com/"]);

        let mut existing = MigrationConfig::new();
        existing.set_secret("azure_app_secret", "old-secret");

        let mut config = MigrationConfig::new();
        configure_service_principal(&mut ui, &existing, &mut config).unwrap();

        assert_eq!(config.secret("azure_app_secret"), "old-secret");
        assert_eq!(
            config.variable("azure_auth_base_url"),
            AUTH_URL_COMMERCIAL
        );
    }

    #[test]
    fn service_principal_sentinel_forces_fresh_secret() {
        let mut ui = MockUI::new();
        ui.queue_input("azure_app_id", &["12345678-1234-1234-1234-123456789abc"]);
        ui.queue_input("azure_app_secret", &["new-secret"]);
        ui.queue_input("auth_url_choice", &["2"]);
        ui.queue_input("azure_api_base_url", &["https://management.usgovcloudapi.net/"]);

        let mut existing = MigrationConfig::new();
        existing.set_secret("azure_app_secret", "CHANGE_ME");

        let mut config = MigrationConfig::new();
        configure_service_principal(&mut ui, &existing, &mut config).unwrap();

        assert_eq!(config.secret("azure_app_secret"), "new-secret");
        assert_eq!(
            config.variable("azure_auth_base_url"),
            AUTH_URL_GOVERNMENT
        );
    }

    #[test]
    fn custom_auth_url_choice_prompts_for_url() {
        let mut ui = MockUI::new();
        ui.queue_input("azure_app_id", &["12345678-1234-1234-1234-123456789abc"]);
        ui.queue_input("azure_app_secret", &["s"]);
        ui.queue_input("auth_url_choice", &["3"]);
        ui.queue_input("azure_auth_base_url", &["https://login.example.cloud/"]);
        ui.queue_input("azure_api_base_url", &["https://api.example.cloud/"]);

        let existing = MigrationConfig::new();
        let mut config = MigrationConfig::new();
        configure_service_principal(&mut ui, &existing, &mut config).unwrap();

        assert_eq!(
            config.variable("azure_auth_base_url"),
            "https://login.example.cloud/"
        );
    }

    #[test]
    fn invalid_auth_choice_falls_back_to_commercial() {
        let mut ui = MockUI::new();
        ui.queue_input("azure_app_id", &["12345678-1234-1234-1234-123456789abc"]);
        ui.queue_input("azure_app_secret", &["s"]);
        ui.queue_input("auth_url_choice", &["7"]);
        ui.queue_input("azure_api_base_url", &["https://management.azure.com/"]);

        let existing = MigrationConfig::new();
        let mut config = MigrationConfig::new();
        configure_service_principal(&mut ui, &existing, &mut config).unwrap();

        assert_eq!(
            config.variable("azure_auth_base_url"),
            AUTH_URL_COMMERCIAL
        );
    }

    #[test]
    fn volume_size_is_stored_as_bytes() {
        let mut ui = MockUI::new();
        ui.queue_input("target_volume_name", &["vol1"]);
        ui.queue_input("volume_size_gib", &["200"]);
        ui.queue_input("target_protocol_types", &["NFSv3"]);
        ui.queue_input("target_throughput_mibps", &["Auto"]);
        ui.queue_input("source_cluster_name", &["cluster1"]);
        ui.queue_input("source_hostname", &["10.1.1.1"]);
        ui.queue_input("source_server_name", &["svm1"]);
        ui.queue_input("source_volume_name", &["srcvol"]);
        ui.queue_input("peer_ip", &["10.0.0.1", ""]);
        ui.queue_input("replication_schedule", &["Daily"]);

        let existing = MigrationConfig::new();
        let mut config = MigrationConfig::new();
        configure_migration_settings(&mut ui, &existing, &mut config).unwrap();

        assert_eq!(
            config.variable("target_usage_threshold"),
            (200u128 * 1024 * 1024 * 1024).to_string()
        );
        assert_eq!(config.variable("target_throughput_mibps"), "");
        assert_eq!(config.variable("source_peer_addresses"), "10.0.0.1");
        assert_eq!(config.variable("replication_schedule"), "Daily");
    }

    #[test]
    fn existing_size_displays_in_gib() {
        let mut ui = MockUI::new();
        ui.queue_input("target_volume_name", &["vol1"]);
        // Keep the displayed current size by submitting empty input.
        ui.queue_input("volume_size_gib", &[""]);
        ui.queue_input("target_protocol_types", &["NFSv3"]);
        ui.queue_input("target_throughput_mibps", &["128"]);
        ui.queue_input("source_cluster_name", &["c"]);
        ui.queue_input("source_hostname", &["h"]);
        ui.queue_input("source_server_name", &["s"]);
        ui.queue_input("source_volume_name", &["v"]);
        ui.queue_input("peer_ip", &["10.0.0.1", ""]);
        ui.queue_input("replication_schedule", &["Hourly"]);

        let mut existing = MigrationConfig::new();
        existing.set_variable(
            "target_usage_threshold",
            (500u128 * 1024 * 1024 * 1024).to_string(),
        );

        let mut config = MigrationConfig::new();
        configure_migration_settings(&mut ui, &existing, &mut config).unwrap();

        assert!(ui.has_message("Current size: 500 GiB"));
        assert_eq!(
            config.variable("target_usage_threshold"),
            (500u128 * 1024 * 1024 * 1024).to_string()
        );
        assert_eq!(config.variable("target_throughput_mibps"), "128");
    }

    #[test]
    fn unparseable_qos_falls_back_to_auto() {
        let mut ui = MockUI::new();
        ui.queue_input("target_volume_name", &["vol1"]);
        ui.queue_input("volume_size_gib", &["100"]);
        ui.queue_input("target_protocol_types", &["CIFS"]);
        ui.queue_input("target_throughput_mibps", &["fast"]);
        ui.queue_input("source_cluster_name", &["c"]);
        ui.queue_input("source_hostname", &["h"]);
        ui.queue_input("source_server_name", &["s"]);
        ui.queue_input("source_volume_name", &["v"]);
        ui.queue_input("peer_ip", &["10.0.0.1", ""]);
        ui.queue_input("replication_schedule", &["Weekly"]);

        let existing = MigrationConfig::new();
        let mut config = MigrationConfig::new();
        configure_migration_settings(&mut ui, &existing, &mut config).unwrap();

        assert_eq!(config.variable("target_throughput_mibps"), "");
        assert!(ui.has_warning("Invalid QoS input"));
    }

    #[test]
    fn optional_settings_lowercase_flag_and_pin_network_features() {
        let mut ui = MockUI::new();
        ui.queue_input("azure_api_version", &["2024-03-01"]);
        ui.queue_input("target_is_large_volume", &["TRUE"]);

        let existing = MigrationConfig::new();
        let mut config = MigrationConfig::new();
        configure_optional_settings(&mut ui, &existing, &mut config).unwrap();

        assert_eq!(config.variable("target_is_large_volume"), "true");
        assert_eq!(config.variable("target_network_features"), "Standard");
    }
}
