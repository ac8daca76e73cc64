//! Interactive setup wizard.
//!
//! Walks through every configuration section, seeding defaults from an
//! existing config file (or a seed template), and persists the result with
//! a backup of the previous version. Cancelling at any point leaves the
//! previously-saved file untouched; nothing is written before the final
//! confirmation.

pub mod peers;
pub mod prompt;
pub mod sections;
pub mod summary;

pub use peers::{collect_peer_addresses, decode_peer_addresses, encode_peer_addresses};
pub use prompt::{prompt_field, Field};

use crate::config::{load_config, save_config, template_path, MigrationConfig};
use crate::error::{AnfError, Result};
use crate::ui::UserInterface;
use std::path::{Path, PathBuf};

/// The interactive setup wizard.
pub struct SetupWizard {
    config_path: PathBuf,
}

impl SetupWizard {
    /// Create a wizard targeting the given config path.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Path the wizard reads from and saves to.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration the wizard seeds its defaults from.
    ///
    /// An existing config file wins. Otherwise, when a seed template exists
    /// next to the target path, the user is offered it (a template that
    /// fails to parse falls back to an empty config). With neither, the
    /// wizard starts empty.
    pub fn load_existing(&self, ui: &mut dyn UserInterface) -> Result<MigrationConfig> {
        if self.config_path.exists() {
            return load_config(&self.config_path);
        }

        let template = template_path(&self.config_path);
        if template.exists()
            && ui.confirm(
                "seed_from_template",
                &format!("No config found. Start from {}?", template.display()),
                true,
            )?
        {
            match load_config(&template) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    ui.warning(&format!(
                        "Could not read template ({e}); starting with an empty configuration"
                    ));
                }
            }
        }

        Ok(MigrationConfig::new())
    }

    /// Run the complete wizard. Returns `true` when a config was saved,
    /// `false` when the user declined at the final confirmation.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<bool> {
        ui.show_header("Azure NetApp Files Migration Assistant - Setup Wizard");
        ui.message("This wizard will help you configure all required variables.");
        ui.message("Press ENTER to keep existing values or type 'skip' to leave a field blank.");

        let existing = self.load_existing(ui)?;
        let mut config = MigrationConfig::new();

        sections::configure_azure_basics(ui, &existing, &mut config)?;
        sections::configure_service_principal(ui, &existing, &mut config)?;
        sections::configure_netapp_resources(ui, &existing, &mut config)?;
        sections::configure_migration_settings(ui, &existing, &mut config)?;
        sections::configure_optional_settings(ui, &existing, &mut config)?;

        summary::show_summary(ui, &config);

        if !ui.confirm("save_config", "Save this configuration?", true)? {
            ui.error("Configuration not saved.");
            return Ok(false);
        }

        ui.message(&format!("Saving configuration to {}", self.config_path.display()));
        save_config(&config, &self.config_path)?;
        ui.success("Configuration saved successfully!");

        ui.message("Next steps:");
        ui.message("  1. Validate: anf-config validate");
        ui.message("  2. Run workflow: ./anf_runner.sh generate");
        ui.message("  3. Check logs: tail -f anf_migration.log");

        Ok(true)
    }
}

/// Map a wizard failure to a user-facing message with a repair hint for
/// parse failures.
pub fn describe_wizard_error(error: &AnfError) -> String {
    match error {
        AnfError::ConfigParseError { .. } => {
            format!("{error}\nHint: run 'anf-config fix <file>' to repair common YAML issues")
        }
        _ => error.to_string(),
    }
}
