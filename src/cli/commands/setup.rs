//! Setup command: run the interactive wizard.

use std::path::PathBuf;

use super::{Command, CommandResult};
use crate::error::Result;
use crate::ui::UserInterface;
use crate::wizard::{describe_wizard_error, SetupWizard};

/// Runs the interactive setup wizard.
pub struct SetupCommand {
    config_path: PathBuf,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let wizard = SetupWizard::new(&self.config_path);

        match wizard.run(ui) {
            Ok(true) => Ok(CommandResult::success()),
            Ok(false) => Ok(CommandResult::failure(1)),
            Err(e) => {
                ui.error(&describe_wizard_error(&e));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
