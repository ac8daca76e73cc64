//! Configuration file loading and persistence.
//!
//! Loading distinguishes a missing file from unreadable and malformed ones
//! so callers can react differently (the wizard seeds a fresh config, the
//! render tool exits with code 1, the doctor suggests the repair tool).
//!
//! Saving never destroys the last known-good file: the previous version is
//! copied to a timestamped backup first, and the new content lands via a
//! whole-file temp-then-rename write.

use crate::config::schema::MigrationConfig;
use crate::error::{AnfError, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Conventional seed template file name, looked up next to the config file.
pub const TEMPLATE_FILE: &str = "config.template.yaml";

/// Directory (sibling to the config file) receiving timestamped backups.
pub const BACKUP_DIR: &str = "backups";

/// Load and parse a configuration file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` (with line/column context when the parser provides
/// it) if the YAML is invalid.
pub fn load_config(path: &Path) -> Result<MigrationConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AnfError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AnfError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`MigrationConfig`].
///
/// The `source_path` only feeds error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<MigrationConfig> {
    serde_yaml::from_str(content).map_err(|e| AnfError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: describe_yaml_error(&e),
    })
}

/// Render a serde_yaml error with line/column context when available.
pub fn describe_yaml_error(error: &serde_yaml::Error) -> String {
    match error.location() {
        Some(loc) => format!(
            "{} (line {}, column {})",
            error,
            loc.line(),
            loc.column()
        ),
        None => error.to_string(),
    }
}

/// Path of the seed template next to the given config path.
pub fn template_path(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) => parent.join(TEMPLATE_FILE),
        None => PathBuf::from(TEMPLATE_FILE),
    }
}

/// Save a configuration, backing up any existing file first.
///
/// The previous file is copied verbatim to
/// `backups/<stem>-<UTC timestamp>.yaml` before the overwrite, and the new
/// content is written via temp-then-rename so an interrupted write cannot
/// truncate the config.
pub fn save_config(config: &MigrationConfig, path: &Path) -> Result<PathBuf> {
    if path.exists() {
        let backup = backup_path(path);
        if let Some(parent) = backup.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &backup)?;
        tracing::debug!("backed up {} to {}", path.display(), backup.display());
    }

    let content =
        serde_yaml::to_string(config).map_err(|e| AnfError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let temp_path = path.with_extension("yaml.tmp");
    fs::write(&temp_path, &content)?;
    fs::rename(&temp_path, path)?;

    Ok(path.to_path_buf())
}

fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "config".to_string());
    let timestamp = Utc::now().format("%Y%m%dT%H%M%S");
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(BACKUP_DIR),
        _ => PathBuf::from(BACKUP_DIR),
    };
    dir.join(format!("{stem}-{timestamp}.yaml"))
}
