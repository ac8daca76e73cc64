//! Peer-address collection and encoding.
//!
//! The `source_peer_addresses` value is polymorphic: empty, a single bare
//! dotted-quad, or a JSON array string for multiple peers. Collection seeds
//! from whatever shape the existing value has, then appends interactively.

use crate::config::{validate_ip_address, Validation, PEER_ADDRESS_PLACEHOLDER};
use crate::error::Result;
use crate::ui::UserInterface;
use regex::Regex;
use std::sync::LazyLock;

static IPV4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}").expect("ipv4 regex is valid")
});

/// Extract IPv4-shaped substrings from a stored value of any shape,
/// discarding the stale placeholder address.
pub fn extract_peer_addresses(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    IPV4_REGEX
        .find_iter(value)
        .map(|m| m.as_str().to_string())
        .filter(|ip| ip != PEER_ADDRESS_PLACEHOLDER)
        .collect()
}

/// Encode a collected list for storage: one address stays bare, two or
/// more become a JSON array string.
pub fn encode_peer_addresses(addresses: &[String]) -> String {
    match addresses {
        [] => String::new(),
        [single] => single.clone(),
        many => serde_json::to_string(many).unwrap_or_default(),
    }
}

/// Decode a stored value back into its address list.
pub fn decode_peer_addresses(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<String>>(value) {
        Ok(list) => list,
        Err(_) => vec![value.to_string()],
    }
}

/// Interactively collect peer addresses, returning the encoded value.
pub fn collect_peer_addresses(ui: &mut dyn UserInterface, existing: &str) -> Result<String> {
    ui.message("Source Cluster Peer Addresses");
    ui.message("Enter the IP address(es) of your ONTAP cluster's intercluster LIFs.");
    ui.message("You can find these with: 'network interface show -role intercluster'");
    ui.message("Enter one IP address at a time. Press ENTER with no input when done.");

    let existing_ips = extract_peer_addresses(existing);
    let mut peers: Vec<String> = Vec::new();

    if !existing_ips.is_empty() {
        ui.message("Current peer addresses:");
        for (i, ip) in existing_ips.iter().enumerate() {
            ui.message(&format!("  {}. {}", i + 1, ip));
        }

        if ui.confirm("keep_peers", "Keep existing peer addresses?", true)? {
            peers = existing_ips;
            ui.success(&format!("Keeping {} existing peer address(es)", peers.len()));
        } else {
            ui.message("Starting fresh with peer addresses");
        }
    }

    loop {
        let label = format!("Peer IP Address #{} (or ENTER to finish)", peers.len() + 1);
        let entry = ui.input("peer_ip", &label, None)?;
        let entry = entry.trim();

        if entry.is_empty() {
            break;
        }

        match validate_ip_address(entry) {
            Validation::Valid => {}
            _ => {
                ui.error("Must be a valid IP address (e.g., 192.168.1.100)");
                continue;
            }
        }

        if peers.iter().any(|ip| ip == entry) {
            ui.warning(&format!("IP {entry} already added, skipping"));
            continue;
        }

        ui.success(&format!("Added peer IP: {entry}"));
        peers.push(entry.to_string());
    }

    if peers.is_empty() {
        ui.warning("No peer addresses configured. This will cause cluster peering to fail.");
        let add_placeholder = ui.confirm(
            "peer_placeholder",
            &format!("Add placeholder IP ({PEER_ADDRESS_PLACEHOLDER})? You can update it later"),
            true,
        )?;
        return Ok(if add_placeholder {
            PEER_ADDRESS_PLACEHOLDER.to_string()
        } else {
            String::new()
        });
    }

    ui.success(&format!(
        "Configured {} peer address(es): {}",
        peers.len(),
        peers.join(", ")
    ));
    Ok(encode_peer_addresses(&peers))
}
