//! Drift detection between script placeholders and the configuration.
//!
//! The orchestration shell scripts reference configuration values through
//! `{{key}}` placeholders. A placeholder whose key is absent from the merged
//! namespace will survive substitution as a literal token, so this module
//! scans the scripts up front and reports the gap before anything runs.

use crate::config::MigrationConfig;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder regex is valid"));

/// Maximum value length echoed in the report before truncation.
const VALUE_DISPLAY_LIMIT: usize = 50;

/// Partition of referenced keys by presence in the configuration.
#[derive(Debug, Default)]
pub struct DriftReport {
    /// Referenced keys that resolve in the merged namespace.
    pub present: BTreeSet<String>,
    /// Referenced keys with no configuration entry.
    pub missing: BTreeSet<String>,
}

impl DriftReport {
    /// Whether any referenced key is missing.
    pub fn has_drift(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Collect the shell scripts scanned by default: `*.sh` in the directory.
pub fn default_script_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "sh"))
        .collect();
    files.sort();
    Ok(files)
}

/// Extract every literal `{{key}}` placeholder key referenced by the files.
///
/// Matches containing a quote or `+` are dynamically-constructed placeholder
/// expressions, not literal references, and are skipped. Unreadable files
/// are skipped with a warning rather than failing the scan.
pub fn find_referenced_keys(files: &[PathBuf]) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();

    for file in files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("could not read {}: {}", file.display(), e);
                continue;
            }
        };

        for capture in PLACEHOLDER_REGEX.captures_iter(&content) {
            let key = &capture[1];
            if key.contains('\'') || key.contains('"') || key.contains('+') {
                continue;
            }
            keys.insert(key.to_string());
        }
    }

    keys
}

/// Partition referenced keys by membership in the merged namespace.
pub fn check(config: &MigrationConfig, referenced: &BTreeSet<String>) -> DriftReport {
    let mut report = DriftReport::default();

    for key in referenced {
        if config.defines(key) {
            report.present.insert(key.clone());
        } else {
            report.missing.insert(key.clone());
        }
    }

    report
}

/// Whether a key names a value that must not be echoed in reports.
pub fn is_sensitive_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    lower.contains("password") || lower.contains("secret") || lower.contains("key")
}

/// Render a value for the report, hiding sensitive keys and truncating
/// long values.
pub fn display_value(key: &str, value: &str) -> String {
    if is_sensitive_key(key) {
        return "***HIDDEN***".to_string();
    }
    if value.chars().count() > VALUE_DISPLAY_LIMIT {
        let truncated: String = value.chars().take(VALUE_DISPLAY_LIMIT).collect();
        format!("{truncated}...")
    } else {
        value.to_string()
    }
}
