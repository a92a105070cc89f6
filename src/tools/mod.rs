//! Pinned tool catalog and the ensure-installed workflow.
//!
//! - [`catalog`]: the static [`ToolSpec`] table, in install order
//! - [`installer`]: detect, decide, download and install one tool
//! - [`reporter`]: first-line version summary per tool
//! - [`cleanup`]: removal of transient download artifacts

pub mod catalog;
pub mod cleanup;
pub mod installer;
pub mod reporter;
pub mod spec;

pub use catalog::{find, select, transient_artifacts, TOOLS};
pub use cleanup::{cleanup, CleanupReport};
pub use installer::{decide, report_outcome, Decision, InstallOutcome, Installer};
pub use reporter::{collect_versions, first_line, render_versions, VersionEntry, VersionStatus};
pub use spec::{render, InstallAction, ToolSpec};
