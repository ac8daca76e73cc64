//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait abstracting all user interaction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`MockUI`] with scripted responses for tests
//!
//! Prompts are keyed: every input/password/confirm call carries a stable
//! key so tests can script responses per field independent of display
//! wording.

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a banner header.
    fn show_header(&mut self, title: &str);

    /// Show a section divider.
    fn show_section(&mut self, title: &str);

    /// Read one line of input. `default_display` is shown alongside the
    /// question but NOT auto-applied: an empty line is returned as-is so
    /// callers control keep-current semantics.
    fn input(&mut self, key: &str, question: &str, default_display: Option<&str>)
        -> Result<String>;

    /// Read a secret without echoing. Never displays a current value.
    fn password(&mut self, key: &str, question: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, key: &str, question: &str, default: bool) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Create the UI appropriate for the current terminal.
pub fn create_ui(quiet: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(quiet))
}
