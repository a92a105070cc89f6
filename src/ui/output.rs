//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Stream subprocess output to the terminal.
    Verbose,
    /// Spinners, messages and status lines.
    #[default]
    Normal,
    /// Status lines only: no spinners, no plain messages.
    Quiet,
}

impl OutputMode {
    /// Check if this mode streams subprocess output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows plain messages.
    pub fn shows_messages(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn only_verbose_streams_command_output() {
        assert!(OutputMode::Verbose.shows_command_output());
        assert!(!OutputMode::Normal.shows_command_output());
        assert!(!OutputMode::Quiet.shows_command_output());
    }

    #[test]
    fn quiet_hides_spinners_and_messages() {
        assert!(!OutputMode::Quiet.shows_spinners());
        assert!(!OutputMode::Quiet.shows_messages());
        assert!(OutputMode::Normal.shows_spinners());
        assert!(OutputMode::Verbose.shows_messages());
    }
}
