//! Removal of transient download artifacts.

use std::io::ErrorKind;
use std::path::Path;

use crate::ui::UserInterface;

/// Which artifacts a cleanup pass removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: Vec<String>,
    /// Files that exist but could not be removed, with the reason.
    pub failed: Vec<(String, String)>,
}

/// Remove each named artifact from `work_dir`.
///
/// Absent files are skipped silently, so running this twice is harmless.
/// Other removal errors are reported as warnings and never abort.
pub fn cleanup(work_dir: &Path, artifacts: &[&str], ui: &mut dyn UserInterface) -> CleanupReport {
    let mut report = CleanupReport::default();

    for name in artifacts {
        let path = work_dir.join(name);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                ui.info(&format!("Removed temporary file: {}", name));
                report.removed.push(name.to_string());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                ui.warning(&format!("Could not remove {}: {}", path.display(), e));
                report.failed.push((name.to_string(), e.to_string()));
            }
        }
    }

    report
}
