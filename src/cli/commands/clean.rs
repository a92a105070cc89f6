//! The `clean` command: remove leftover downloads.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::tools::{cleanup, transient_artifacts};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    work_dir: PathBuf,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(work_dir: &Path) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
        }
    }
}

impl Command for CleanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = cleanup(&self.work_dir, &transient_artifacts(), ui);
        if report.removed.is_empty() && report.failed.is_empty() {
            ui.message("Nothing to clean.");
        }
        Ok(CommandResult::success())
    }
}
