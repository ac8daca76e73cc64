//! Fix command: auto-repair common configuration file issues.

use std::path::PathBuf;

use super::{Command, CommandResult};
use crate::error::{AnfError, Result};
use crate::repair::{backup_path, repair};
use crate::ui::UserInterface;

/// Applies heuristic repairs to a configuration file.
pub struct FixCommand {
    config_path: PathBuf,
}

impl FixCommand {
    /// Create a new fix command.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

impl Command for FixCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("Auto-fixing YAML file: {}", self.config_path.display()));

        if !self.config_path.exists() {
            ui.error(&format!("File not found: {}", self.config_path.display()));
            return Ok(CommandResult::failure(1));
        }

        let outcome = match repair(&self.config_path) {
            Ok(outcome) => outcome,
            Err(e @ AnfError::EncodingError { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        ui.message(&format!("Read file with encoding: {}", outcome.encoding.label()));

        if !outcome.valid {
            ui.error("YAML still invalid after auto-fixes");
            ui.message("You may need to manually fix syntax errors or run the setup wizard.");
            return Ok(CommandResult::failure(1));
        }

        if outcome.fixes.is_empty() && !outcome.rewritten {
            ui.success("No fixes needed - file was already valid");
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "Created backup: {}",
            backup_path(&self.config_path).display()
        ));
        if outcome.fixes.is_empty() {
            ui.message("Re-encoded file as UTF-8");
        } else {
            ui.message("Applied fixes:");
            for fix in &outcome.fixes {
                ui.message(&format!("  - {fix}"));
            }
        }
        ui.success("YAML file has been automatically fixed!");

        Ok(CommandResult::success())
    }
}
