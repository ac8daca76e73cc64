//! anf-config - Configuration toolkit for Azure NetApp Files migration workflows.
//!
//! The migration itself is driven by shell scripts; this crate owns the
//! configuration pipeline those scripts consume: an interactive setup wizard,
//! template placeholder substitution, YAML diagnostics and auto-repair, drift
//! validation, and a one-time legacy variable-name migration.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration schema, loading, and field validation
//! - [`drift`] - Placeholder drift detection against the orchestration scripts
//! - [`error`] - Error types and result aliases
//! - [`rename`] - Legacy variable-name migration
//! - [`repair`] - Heuristic repair of malformed configuration files
//! - [`template`] - Placeholder substitution for request bodies and URLs
//! - [`ui`] - Interactive prompts and terminal output
//! - [`wizard`] - Interactive setup flow
//!
//! # Example
//!
//! ```
//! use anf_config::template::{substitute, RenderMode};
//! use std::collections::BTreeMap;
//!
//! let mut vars = BTreeMap::new();
//! vars.insert("target_location".to_string(), "eastus2".to_string());
//! let url = substitute("https://{{target_location}}.example", &vars, RenderMode::Url);
//! assert_eq!(url, "https://eastus2.example");
//! ```

pub mod cli;
pub mod config;
pub mod drift;
pub mod error;
pub mod rename;
pub mod repair;
pub mod template;
pub mod ui;
pub mod wizard;

pub use error::{AnfError, Result};
