//! Visual theme and styling.

use console::Style;

/// The installer's visual theme.
#[derive(Debug, Clone)]
pub struct ToolsTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational notices (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (bold cyan).
    pub header: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
}

impl Default for ToolsTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolsTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            header: Style::new().bold().cyan(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            command: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an informational notice.
    pub fn format_info(&self, msg: &str) -> String {
        format!("{} {}", self.info.apply_to("ℹ"), msg)
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(title.chars().count().max(3));
        format!(
            "{}\n{}",
            self.header.apply_to(title),
            self.border.apply_to(rule)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = ToolsTheme::plain().format_success("kubectl installed");
        assert_eq!(msg, "✓ kubectl installed");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = ToolsTheme::plain().format_warning("outdated");
        assert_eq!(msg, "⚠ outdated");
    }

    #[test]
    fn theme_formats_error() {
        let msg = ToolsTheme::plain().format_error("Command failed");
        assert_eq!(msg, "✗ Command failed");
    }

    #[test]
    fn theme_formats_info() {
        let msg = ToolsTheme::plain().format_info("Removed temporary file: argo.gz");
        assert_eq!(msg, "ℹ Removed temporary file: argo.gz");
    }

    #[test]
    fn header_is_underlined_to_title_width() {
        let msg = ToolsTheme::plain().format_header("Summary");
        assert_eq!(msg, "Summary\n=======");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ToolsTheme::default();
        let new = ToolsTheme::new();
        assert_eq!(default.format_success("x"), new.format_success("x"));
    }
}
