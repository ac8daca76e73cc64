//! Validate command: report drift between scripts and configuration.

use std::path::PathBuf;

use super::{Command, CommandResult};
use crate::config::load_config;
use crate::drift::{check, default_script_files, display_value, find_referenced_keys};
use crate::error::Result;
use crate::ui::UserInterface;

/// Cross-checks script placeholders against the configuration.
pub struct ValidateCommand {
    config_path: PathBuf,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("ANF Migration Assistant - Variable Validation");

        let scripts = default_script_files(std::path::Path::new("."))?;
        let referenced = find_referenced_keys(&scripts);
        ui.message(&format!(
            "Found {} unique variables in {} script(s)",
            referenced.len(),
            scripts.len()
        ));

        let config = match load_config(&self.config_path) {
            Ok(config) => config,
            Err(e) => {
                ui.error(&format!("Error loading {}: {e}", self.config_path.display()));
                return Ok(CommandResult::failure(1));
            }
        };
        let merged = config.merged();
        ui.message(&format!(
            "Found {} variables in {}",
            merged.len(),
            self.config_path.display()
        ));

        let report = check(&config, &referenced);

        ui.message("Variable analysis:");
        for key in &report.present {
            let value = merged.get(key).map(String::as_str).unwrap_or("");
            ui.success(&format!("{key}: {}", display_value(key, value)));
        }
        for key in &report.missing {
            ui.error(&format!("{key}: MISSING"));
        }

        ui.message(&format!(
            "Summary: {} present, {} missing",
            report.present.len(),
            report.missing.len()
        ));

        if report.has_drift() {
            ui.message("To fix missing variables:");
            ui.message("  1. Run: anf-config setup");
            ui.message(&format!(
                "  2. Or manually add them to {}",
                self.config_path.display()
            ));
            Ok(CommandResult::failure(1))
        } else {
            ui.success("All variables are present!");
            Ok(CommandResult::success())
        }
    }
}
