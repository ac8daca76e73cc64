//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the resolved config path.
    ///
    /// The `--config` global flag wins; otherwise the conventional
    /// `config.yaml` in the working directory is used. Per-command
    /// positional config paths override both.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path: config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Get the resolved default config path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn resolve(&self, per_command: &Option<PathBuf>) -> PathBuf {
        per_command
            .clone()
            .unwrap_or_else(|| self.config_path.clone())
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Setup(_) => {
                let cmd = super::setup::SetupCommand::new(self.config_path.clone());
                cmd.execute(ui)
            }
            Commands::Render(args) => {
                let cmd = super::render::RenderCommand::new(
                    args.mode,
                    self.resolve(&args.config_file),
                );
                cmd.execute(ui)
            }
            Commands::Doctor(args) => {
                let cmd = super::doctor::DoctorCommand::new(self.resolve(&args.config_file));
                cmd.execute(ui)
            }
            Commands::Fix(args) => {
                let cmd = super::fix::FixCommand::new(self.resolve(&args.config_file));
                cmd.execute(ui)
            }
            Commands::Validate(_) => {
                let cmd = super::validate::ValidateCommand::new(self.config_path.clone());
                cmd.execute(ui)
            }
            Commands::Rename(args) => {
                let cmd = super::rename::RenameCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
