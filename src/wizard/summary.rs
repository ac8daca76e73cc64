//! Configuration summary shown before the save confirmation.

use crate::config::MigrationConfig;
use crate::ui::UserInterface;

use super::peers::decode_peer_addresses;

const GIB: u128 = 1024 * 1024 * 1024;

/// Display the collected configuration for a final review.
pub fn show_summary(ui: &mut dyn UserInterface, config: &MigrationConfig) {
    ui.show_section("Configuration Summary");

    let throughput = config.variable("target_throughput_mibps");
    let qos = if throughput.trim().is_empty() {
        "Auto QoS".to_string()
    } else {
        format!("Manual QoS ({throughput} MiB/s)")
    };

    let size_gib = config
        .variable("target_usage_threshold")
        .parse::<u128>()
        .map(|bytes| bytes / GIB)
        .unwrap_or(0);

    ui.message(&format!("Azure Region: {}", config.variable("target_location")));
    ui.message(&format!(
        "Resource Group: {}",
        config.variable("target_resource_group")
    ));
    ui.message(&format!(
        "NetApp Account: {}",
        config.variable("target_netapp_account")
    ));
    ui.message(&format!(
        "Capacity Pool: {}",
        config.variable("target_capacity_pool")
    ));
    ui.message(&format!(
        "Destination Volume: {} ({} GiB)",
        config.variable("target_volume_name"),
        size_gib
    ));
    ui.message(&format!(
        "Protocol: {}",
        config.variable("target_protocol_types")
    ));
    ui.message(&format!("QoS: {qos}"));
    ui.message(&format!(
        "Replication: {}",
        config.variable("replication_schedule")
    ));
    ui.message(&format!(
        "Source Cluster: {}",
        config.variable("source_cluster_name")
    ));
    ui.message(&format!(
        "Source Volume: {}",
        config.variable("source_volume_name")
    ));

    let peers = decode_peer_addresses(config.variable("source_peer_addresses"));
    if peers.is_empty() {
        ui.warning("Peer Addresses: NOT CONFIGURED");
    } else {
        ui.message(&format!("Peer Addresses: {}", peers.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn summary_shows_size_in_gib_and_peer_list() {
        let mut ui = MockUI::new();
        let mut config = MigrationConfig::new();
        config.set_variable("target_volume_name", "vol1");
        config.set_variable(
            "target_usage_threshold",
            (250u128 * 1024 * 1024 * 1024).to_string(),
        );
        config.set_variable(
            "source_peer_addresses",
            r#"["10.0.0.1","10.0.0.2"]"#,
        );

        show_summary(&mut ui, &config);

        assert!(ui.has_message("vol1 (250 GiB)"));
        assert!(ui.has_message("Peer Addresses: 10.0.0.1, 10.0.0.2"));
    }

    #[test]
    fn summary_reports_auto_qos_for_empty_throughput() {
        let mut ui = MockUI::new();
        let config = MigrationConfig::new();

        show_summary(&mut ui, &config);

        assert!(ui.has_message("Auto QoS"));
        assert!(ui.has_warning("NOT CONFIGURED"));
    }

    #[test]
    fn summary_reports_manual_qos() {
        let mut ui = MockUI::new();
        let mut config = MigrationConfig::new();
        config.set_variable("target_throughput_mibps", "64");

        show_summary(&mut ui, &config);

        assert!(ui.has_message("Manual QoS (64 MiB/s)"));
    }
}
