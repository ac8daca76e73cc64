//! Visual theme and styling.

use console::Style;

/// Check whether colored output should be used.
///
/// Honors the `NO_COLOR` convention and falls back to terminal detection.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}

/// The tool's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (bold magenta).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a banner header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a section divider.
    pub fn format_section(&self, title: &str) -> String {
        format!(
            "{}\n{}",
            self.dim.apply_to("─".repeat(60)),
            self.header.apply_to(title)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_success_includes_icon_and_text() {
        let theme = Theme::plain();
        assert_eq!(theme.format_success("saved"), "✓ saved");
    }

    #[test]
    fn format_warning_includes_icon() {
        let theme = Theme::plain();
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
    }

    #[test]
    fn format_error_includes_icon() {
        let theme = Theme::plain();
        assert_eq!(theme.format_error("bad"), "✗ bad");
    }

    #[test]
    fn section_contains_divider_and_title() {
        let theme = Theme::plain();
        let section = theme.format_section("Azure Basics");
        assert!(section.contains("Azure Basics"));
        assert!(section.contains('─'));
    }
}
