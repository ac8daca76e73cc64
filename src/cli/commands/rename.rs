//! Rename command: migrate legacy variable names across workflow scripts.
//!
//! Dry-run by default; pass `--write` to apply the planned changes.

use std::path::Path;

use super::{Command, CommandResult};
use crate::cli::args::RenameArgs;
use crate::error::Result;
use crate::rename::{apply_plan, plan_file, TARGET_FILES, VARIABLE_MAPPING};
use crate::ui::UserInterface;

/// Applies the legacy-to-canonical variable-name mapping.
pub struct RenameCommand {
    args: RenameArgs,
}

impl RenameCommand {
    /// Create a new rename command.
    pub fn new(args: RenameArgs) -> Self {
        Self { args }
    }
}

impl Command for RenameCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Variable Name Standardization");
        ui.message(&format!(
            "{} variable mappings, {} target file(s)",
            VARIABLE_MAPPING.len(),
            TARGET_FILES.len()
        ));
        if !self.args.write {
            ui.warning("Dry run - no files will be modified (pass --write to apply)");
        }

        let mut changed = 0usize;
        for name in TARGET_FILES {
            let path = Path::new(name);
            if !path.exists() {
                ui.warning(&format!("Skipping missing file: {name}"));
                continue;
            }

            let plan = plan_file(path)?;
            if !plan.has_changes() {
                ui.message(&format!("{name}: no changes"));
                continue;
            }

            changed += 1;
            ui.message(&format!("{name}:"));
            for change in &plan.changes {
                ui.message(&format!("  - {change}"));
            }

            if self.args.write {
                apply_plan(&plan)?;
                ui.success(&format!("Updated {name}"));
            }
        }

        if changed == 0 {
            ui.success("All files already use canonical variable names");
        } else if !self.args.write {
            ui.message(&format!(
                "{changed} file(s) would change - re-run with --write to apply"
            ));
        }

        Ok(CommandResult::success())
    }
}
