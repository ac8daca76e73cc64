//! Configuration document schema.
//!
//! The persisted configuration is a YAML document with two flat
//! string-to-string mappings:
//!
//! ```yaml
//! variables:
//!   target_location: eastus
//! secrets:
//!   azure_app_secret: "..."
//! ```
//!
//! Secrets live in their own namespace so diagnostics can mask them, but
//! consumers (template rendering, drift validation) see one merged
//! namespace via [`MigrationConfig::merged`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variable key holding the replication peer addresses.
///
/// The value is encoded polymorphically: empty (no peers), a bare dotted-quad
/// (one peer), or a JSON array string (multiple peers).
pub const PEER_ADDRESSES_KEY: &str = "source_peer_addresses";

/// Placeholder peer address written when the user configures no peers.
pub const PEER_ADDRESS_PLACEHOLDER: &str = "192.168.1.100";

/// Sentinel value meaning a secret has not been configured yet.
pub const SECRET_SENTINEL: &str = "CHANGE_ME";

/// The persisted configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Non-secret variables.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,

    /// Secret values, masked in diagnostics.
    #[serde(default)]
    pub secrets: BTreeMap<String, String>,
}

impl MigrationConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a variable value, or empty string when unset.
    pub fn variable(&self, key: &str) -> &str {
        self.variables.get(key).map(String::as_str).unwrap_or("")
    }

    /// Get a secret value, or empty string when unset.
    pub fn secret(&self, key: &str) -> &str {
        self.secrets.get(key).map(String::as_str).unwrap_or("")
    }

    /// Set a variable value.
    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Set a secret value.
    pub fn set_secret(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.secrets.insert(key.into(), value.into());
    }

    /// The flat namespace used for substitution and drift lookups.
    ///
    /// Variables are inserted first, then secrets: a key present in both
    /// resolves to the secret value.
    pub fn merged(&self) -> BTreeMap<String, String> {
        let mut merged = self.variables.clone();
        for (key, value) in &self.secrets {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Check whether a key resolves in the merged namespace.
    pub fn defines(&self, key: &str) -> bool {
        self.variables.contains_key(key) || self.secrets.contains_key(key)
    }
}
