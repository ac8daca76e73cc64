//! Legacy variable-name migration.
//!
//! Earlier revisions of the workflow used terse camelCase variable names.
//! This module rewrites the orchestration scripts from that scheme to the
//! canonical prefixed one, covering the four syntactic contexts the names
//! appear in: `{{placeholder}}` tokens, YAML mapping keys, quoted string
//! literals, and `get_config_value("...")` accessor calls.
//!
//! Runs as a dry-run by default; writes are whole-file and atomic.

use crate::error::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Legacy name to canonical name, one entry per migrated variable.
pub const VARIABLE_MAPPING: &[(&str, &str)] = &[
    // Authentication and Azure configuration
    ("tenant", "azure_tenant_id"),
    ("subscriptionId", "azure_subscription_id"),
    ("appId", "azure_app_id"),
    ("appIdPassword", "azure_app_secret"),
    ("api-version", "azure_api_version"),
    ("apicloudurl", "azure_api_base_url"),
    ("authcloudurl", "azure_auth_base_url"),
    // Target Azure NetApp Files configuration
    ("resourceGroupName", "target_resource_group"),
    ("location", "target_location"),
    ("accountName", "target_netapp_account"),
    ("poolName", "target_capacity_pool"),
    ("volumeName", "target_volume_name"),
    ("serviceLevel", "target_service_level"),
    ("volsubnetId", "target_subnet_id"),
    ("networkFeatures", "target_network_features"),
    ("isLargeVolume", "target_is_large_volume"),
    ("volusageThreshold", "target_usage_threshold"),
    ("volthroughputMibps", "target_throughput_mibps"),
    ("volumeProtocolTypes", "target_protocol_types"),
    // Source NetApp configuration
    ("maclusterName", "source_cluster_name"),
    ("maexternalHostName", "source_hostname"),
    ("mapeerAddresses", "source_peer_addresses"),
    ("maserverName", "source_server_name"),
    ("mavolumeName", "source_volume_name"),
    // Replication configuration
    ("replicationSchedule", "replication_schedule"),
];

/// Files the migration rewrites.
pub const TARGET_FILES: &[&str] = &["anf_workflow.sh", "anf_interactive.sh", "anf_runner.sh"];

/// Planned changes for one file.
#[derive(Debug)]
pub struct FilePlan {
    pub path: PathBuf,
    /// One line per replacement context that matched.
    pub changes: Vec<String>,
    /// Rewritten content, present only when something changed.
    pub new_content: Option<String>,
}

impl FilePlan {
    /// Whether any replacement applies to this file.
    pub fn has_changes(&self) -> bool {
        self.new_content.is_some()
    }
}

/// Compute all replacements for one file without writing.
pub fn plan_file(path: &Path) -> Result<FilePlan> {
    let original = fs::read_to_string(path)?;
    let mut content = original.clone();
    let mut changes = Vec::new();

    for (old, new) in VARIABLE_MAPPING {
        let escaped = regex::escape(old);

        // {{placeholder}} tokens, whitespace-tolerant inside the braces.
        let placeholder =
            Regex::new(&format!(r"\{{\{{\s*{escaped}\s*\}}\}}")).expect("placeholder pattern");
        if placeholder.is_match(&content) {
            content = placeholder
                .replace_all(&content, format!("{{{{{new}}}}}"))
                .into_owned();
            changes.push(format!("{{{{{old}}}}} -> {{{{{new}}}}}"));
        }

        // YAML mapping keys at line start.
        let yaml_key =
            Regex::new(&format!(r"(?m)^(\s*){escaped}(\s*:)")).expect("yaml key pattern");
        if yaml_key.is_match(&content) {
            content = yaml_key
                .replace_all(&content, format!("${{1}}{new}${{2}}"))
                .into_owned();
            changes.push(format!("YAML key: {old}: -> {new}:"));
        }

        // Quoted string literals.
        let quoted =
            Regex::new(&format!(r#"['"]\s*{escaped}\s*['"]"#)).expect("quoted pattern");
        if quoted.is_match(&content) {
            content = quoted.replace_all(&content, format!("'{new}'")).into_owned();
            changes.push(format!("string literal: '{old}' -> '{new}'"));
        }

        // get_config_value accessor calls.
        let accessor = Regex::new(&format!(
            r#"get_config_value\s*\(\s*["']\s*{escaped}\s*["']\s*\)"#
        ))
        .expect("accessor pattern");
        if accessor.is_match(&content) {
            content = accessor
                .replace_all(&content, format!("get_config_value(\"{new}\")"))
                .into_owned();
            changes.push(format!(
                "accessor: get_config_value('{old}') -> get_config_value('{new}')"
            ));
        }
    }

    let new_content = if content != original {
        Some(content)
    } else {
        None
    };

    Ok(FilePlan {
        path: path.to_path_buf(),
        changes,
        new_content,
    })
}

/// Write a planned rewrite atomically (temp file + rename).
pub fn apply_plan(plan: &FilePlan) -> Result<()> {
    let Some(content) = &plan.new_content else {
        return Ok(());
    };

    let mut temp_name = plan.path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, &plan.path)?;

    Ok(())
}
