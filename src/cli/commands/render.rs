//! Render command: substitute a template read from stdin.
//!
//! The template arrives on standard input and the rendered result leaves on
//! standard output, so the command slots into a shell pipeline:
//!
//! ```sh
//! anf-config render body config.yaml < create_volume.json.tmpl
//! ```

use std::io::{Read, Write};
use std::path::PathBuf;

use super::{Command, CommandResult};
use crate::config::load_config;
use crate::error::{AnfError, Result};
use crate::template::{substitute, RenderMode};
use crate::ui::UserInterface;

/// Renders a template against the merged configuration namespace.
pub struct RenderCommand {
    mode: RenderMode,
    config_path: PathBuf,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(mode: RenderMode, config_path: PathBuf) -> Self {
        Self {
            mode,
            config_path,
        }
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.config_path) {
            Ok(config) => config,
            Err(e @ AnfError::ConfigNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => {
                ui.error(&format!("Failed to load config: {e}"));
                return Ok(CommandResult::failure(1));
            }
        };

        let mut template = String::new();
        std::io::stdin().read_to_string(&mut template)?;

        let rendered = substitute(&template, &config.merged(), self.mode);

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;

        Ok(CommandResult::success())
    }
}
