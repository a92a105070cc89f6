//! The `status` command: report installed versions without changing anything.

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::tools::{collect_versions, render_versions, TOOLS};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand<'a> {
    runner: &'a dyn CommandRunner,
    args: StatusArgs,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(runner: &'a dyn CommandRunner, args: StatusArgs) -> Self {
        Self { runner, args }
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tools: Vec<_> = TOOLS.iter().collect();
        let entries = collect_versions(self.runner, &tools);

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Installed versions");
        render_versions(&entries, ui);

        let behind = entries.iter().filter(|e| !e.at_target()).count();
        if behind > 0 {
            ui.message("");
            ui.message(&format!(
                "{} of {} tools are not at their pinned version. Run `install-tools run` to fix.",
                behind,
                entries.len()
            ));
        }

        Ok(CommandResult::success())
    }
}
