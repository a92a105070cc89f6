//! The `list` command: show the pinned tool table.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::tools::{ToolSpec, TOOLS};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// One pinned tool as shown by `list --json`.
#[derive(Debug, Serialize)]
struct ListEntry {
    name: &'static str,
    target_version: &'static str,
    download_url: String,
    install_path: &'static str,
}

impl From<&ToolSpec> for ListEntry {
    fn from(spec: &ToolSpec) -> Self {
        Self {
            name: spec.name,
            target_version: spec.target_version,
            download_url: spec.download_url(),
            install_path: spec.install_path,
        }
    }
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    fn render_table(&self) -> String {
        let mut table = Table::new(&["Tool", "Version", "Install path", "Source"]);
        for entry in TOOLS.iter().map(ListEntry::from) {
            table.add_row(&[
                entry.name,
                entry.target_version,
                entry.install_path,
                entry.download_url.as_str(),
            ]);
        }
        table.render()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let entries: Vec<ListEntry> = TOOLS.iter().map(ListEntry::from).collect();
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            ui.message(&self.render_table());
        }
        Ok(CommandResult::success())
    }
}
