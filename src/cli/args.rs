//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::template::RenderMode;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// anf-config - Configuration toolkit for ANF migration workflows.
#[derive(Debug, Parser)]
#[command(name = "anf-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress informational output (warnings and errors still print)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive setup wizard
    Setup(SetupArgs),

    /// Render a template from stdin against the configuration
    Render(RenderArgs),

    /// Diagnose configuration file issues
    Doctor(DoctorArgs),

    /// Auto-repair common configuration file issues
    Fix(FixArgs),

    /// Check that scripts reference only configured variables
    Validate(ValidateArgs),

    /// Migrate legacy variable names across workflow scripts
    Rename(RenameArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {}

/// Arguments for the `render` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// What kind of text is being rendered
    #[arg(value_enum)]
    pub mode: RenderMode,

    /// Configuration file supplying the merged namespace
    pub config_file: Option<PathBuf>,
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DoctorArgs {
    /// Configuration file to diagnose
    pub config_file: Option<PathBuf>,
}

/// Arguments for the `fix` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FixArgs {
    /// Configuration file to repair
    pub config_file: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {}

/// Arguments for the `rename` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RenameArgs {
    /// Apply changes (default is a dry run that only reports them)
    #[arg(long)]
    pub write: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
