//! Post-install version summary.

use serde::Serialize;

use crate::shell::{CommandRunner, ExternalCommand};
use crate::ui::UserInterface;

use super::spec::ToolSpec;

/// What the version command reported for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "version", rename_all = "snake_case")]
pub enum VersionStatus {
    /// First line of the version output.
    Found(String),
    /// On PATH, but the version command failed or printed nothing.
    Unavailable,
    /// Not on PATH.
    Missing,
}

/// One row of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionEntry {
    pub name: String,
    pub target_version: String,
    #[serde(flatten)]
    pub status: VersionStatus,
}

impl VersionEntry {
    /// Whether the reported version contains the pinned one.
    pub fn at_target(&self) -> bool {
        matches!(&self.status, VersionStatus::Found(v) if v.contains(&self.target_version))
    }
}

/// The first line of `output`, trimmed.
pub fn first_line(output: &str) -> &str {
    output.lines().next().unwrap_or("").trim()
}

/// Query every tool's version command.
pub fn collect_versions(runner: &dyn CommandRunner, tools: &[&ToolSpec]) -> Vec<VersionEntry> {
    tools
        .iter()
        .map(|spec| {
            let status = if runner.resolve(spec.name).is_none() {
                VersionStatus::Missing
            } else {
                runner
                    .capture(&ExternalCommand::new(spec.name, spec.report_args.iter().copied()))
                    .map(|out| first_line(&out).to_string())
                    .filter(|line| !line.is_empty())
                    .map_or(VersionStatus::Unavailable, VersionStatus::Found)
            };
            tracing::debug!("{}: {:?}", spec.name, status);
            VersionEntry {
                name: spec.name.to_string(),
                target_version: spec.target_version.to_string(),
                status,
            }
        })
        .collect()
}

/// Print one status line per entry.
pub fn render_versions(entries: &[VersionEntry], ui: &mut dyn UserInterface) {
    for entry in entries {
        match &entry.status {
            VersionStatus::Found(line) => ui.success(&format!("{}: {}", entry.name, line)),
            VersionStatus::Unavailable => {
                ui.warning(&format!("{}: version unavailable", entry.name))
            }
            VersionStatus::Missing => ui.error(&format!("{} not found", entry.name)),
        }
    }
}
