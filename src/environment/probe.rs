//! OS release metadata and `uname` lookups.

use std::collections::HashMap;
use std::path::Path;

use crate::shell::{CommandRunner, ExternalCommand};

/// Standard location of the OS release metadata file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Shown when the distribution cannot be determined.
pub const UNKNOWN_DISTRO: &str = "Unknown Linux";

/// Shown when a `uname` field cannot be determined.
pub const UNKNOWN: &str = "Unknown";

/// Host details displayed before installing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub distro: String,
    pub kernel: String,
    pub arch: String,
}

impl SystemInfo {
    /// Whether the architecture matches the linux/amd64 downloads.
    pub fn is_amd64(&self) -> bool {
        matches!(self.arch.as_str(), "x86_64" | "amd64")
    }
}

/// Parse `KEY=value` lines, unquoting values and skipping comments.
pub fn parse_os_release(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Pick a display name: `PRETTY_NAME`, then `NAME`, then a placeholder.
pub fn distro_name(fields: &HashMap<String, String>) -> String {
    ["PRETTY_NAME", "NAME"]
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| UNKNOWN_DISTRO.to_string())
}

/// Gather host details.
///
/// An unreadable `os_release` file falls back to the placeholder name.
pub fn gather(runner: &dyn CommandRunner, os_release: &Path) -> SystemInfo {
    let distro = match std::fs::read_to_string(os_release) {
        Ok(content) => distro_name(&parse_os_release(&content)),
        Err(e) => {
            tracing::debug!("Could not read {}: {}", os_release.display(), e);
            UNKNOWN_DISTRO.to_string()
        }
    };

    let uname = |flag: &str| {
        runner
            .capture(&ExternalCommand::new("uname", [flag]))
            .unwrap_or_else(|| UNKNOWN.to_string())
    };

    SystemInfo {
        distro,
        kernel: uname("-sr"),
        arch: uname("-m"),
    }
}
