//! Interactive terminal UI.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};
use std::io::Write;

use crate::error::{AnfError, Result};

use super::{should_use_colors, Theme, UserInterface};

/// Convert dialoguer errors to AnfError.
fn map_dialoguer_err(e: dialoguer::Error) -> AnfError {
    AnfError::Io(e.into())
}

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    prompt_theme: ColorfulTheme,
    /// Suppress informational output; warnings and errors still print.
    quiet: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(quiet: bool) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            prompt_theme: ColorfulTheme::default(),
            quiet,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new(false)
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.quiet {
            return;
        }
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.quiet {
            return;
        }
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.quiet {
            return;
        }
        writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn show_section(&mut self, title: &str) {
        if self.quiet {
            return;
        }
        writeln!(self.term, "\n{}", self.theme.format_section(title)).ok();
    }

    fn input(
        &mut self,
        _key: &str,
        question: &str,
        default_display: Option<&str>,
    ) -> Result<String> {
        let prompt = match default_display {
            Some(current) if !current.is_empty() => format!("{question} [{current}]"),
            _ => question.to_string(),
        };

        Input::<String>::with_theme(&self.prompt_theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn password(&mut self, _key: &str, question: &str) -> Result<String> {
        Password::with_theme(&self.prompt_theme)
            .with_prompt(question)
            .allow_empty_password(true)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn confirm(&mut self, _key: &str, question: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.prompt_theme)
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}
