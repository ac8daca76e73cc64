//! Doctor command: diagnose configuration file issues.
//!
//! Reports what the repair tool would need to know: encoding, BOM, line
//! endings, a visible-whitespace dump of the opening lines, the YAML parse
//! result with location context, and structural checks for the two expected
//! top-level sections.

use std::fs;
use std::path::PathBuf;

use super::{Command, CommandResult};
use crate::error::Result;
use crate::repair::decode_bytes;
use crate::ui::UserInterface;

/// Diagnoses a configuration file.
pub struct DoctorCommand {
    config_path: PathBuf,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    fn diagnose(&self, ui: &mut dyn UserInterface) -> Result<bool> {
        ui.show_header("YAML Configuration File Diagnostic");
        ui.message(&format!("File: {}", self.config_path.display()));

        if !self.config_path.exists() {
            ui.error("File does not exist");
            return Ok(false);
        }

        let bytes = fs::read(&self.config_path)?;
        ui.message(&format!("File size: {} bytes", bytes.len()));

        if bytes.is_empty() {
            ui.error("File is empty");
            return Ok(false);
        }

        let Some((content, encoding)) = decode_bytes(&bytes) else {
            ui.error("Could not read file with any common encoding");
            return Ok(false);
        };
        ui.success(&format!("Successfully read with encoding: {}", encoding.label()));

        let content = if let Some(stripped) = content.strip_prefix('\u{feff}') {
            ui.warning("File has BOM (Byte Order Mark) - this can cause issues");
            stripped.to_string()
        } else {
            content
        };

        let line_endings = if content.contains("\r\n") {
            "Windows (CRLF)"
        } else if content.contains('\n') {
            "Unix (LF)"
        } else if content.contains('\r') {
            "Mac Classic (CR)"
        } else {
            "No line endings found"
        };
        ui.message(&format!("Line endings: {line_endings}"));

        let lines: Vec<&str> = content.split('\n').take(10).collect();
        ui.message(&format!("First {} lines:", lines.len()));
        for (i, line) in lines.iter().enumerate() {
            // Make tabs and spaces visible for indentation debugging.
            let visible = line.replace('\t', "→").replace(' ', "·");
            ui.message(&format!("  {:2}: {}", i + 1, visible));
        }

        ui.message("YAML parsing test:");
        let parsed: serde_yaml::Value = match serde_yaml::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                ui.error(&format!(
                    "YAML parsing error: {}",
                    crate::config::describe_yaml_error(&e)
                ));
                show_parse_hint(ui, &e.to_string());
                return Ok(false);
            }
        };
        ui.success("YAML parsing successful!");

        let Some(mapping) = parsed.as_mapping() else {
            ui.warning("Root should be a mapping");
            return Ok(false);
        };

        ui.message(&format!("Found {} top-level sections:", mapping.len()));
        for (key, value) in mapping {
            let key = key.as_str().unwrap_or("<non-string>");
            match value.as_mapping() {
                Some(section) => ui.message(&format!("  - {}: {} items", key, section.len())),
                None => ui.message(&format!("  - {key}: not a mapping")),
            }
        }

        let mut complete = true;
        for section in ["variables", "secrets"] {
            if !mapping.contains_key(&serde_yaml::Value::from(section)) {
                ui.warning(&format!("Missing '{section}' section"));
                complete = false;
            }
        }

        Ok(complete)
    }
}

/// Pick a targeted fix hint from the parse error text.
fn show_parse_hint(ui: &mut dyn UserInterface, error_text: &str) {
    let lower = error_text.to_lowercase();
    if lower.contains("tab") {
        ui.message("Hint: replace all tab characters with spaces.");
        ui.message("Most YAML parsers don't allow tabs for indentation.");
    } else if lower.contains("indent") {
        ui.message("Hint: check your indentation.");
        ui.message("Use spaces, not tabs, and keep each level consistent.");
    } else if lower.contains("duplicate") {
        ui.message("Hint: remove duplicate keys.");
        ui.message("Each key can only appear once at the same level.");
    } else if lower.contains("mapping") || lower.contains("sequence") {
        ui.message("Hint: check your YAML structure.");
        ui.message("Make sure colons have spaces after them: 'key: value'.");
    }
    ui.message("Run 'anf-config fix <file>' to apply automatic repairs.");
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let healthy = self.diagnose(ui)?;

        if healthy {
            ui.success("Configuration file is valid!");
            Ok(CommandResult::success())
        } else {
            ui.message("Fix the issues above and try again, or run the setup wizard.");
            Ok(CommandResult::failure(1))
        }
    }
}
