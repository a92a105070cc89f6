//! The ensure-installed workflow for a single tool.
//!
//! [`decide`] is the pure part: given what detection found, it says whether
//! to skip, ask, or install. [`Installer`] carries the decision out through a
//! [`CommandRunner`] and returns an [`InstallOutcome`] that
//! [`report_outcome`] renders.
//!
//! A failed command is returned as an error; nothing already done for the
//! tool is rolled back.

use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};
use crate::shell::{CommandRunner, ExternalCommand};
use crate::ui::{Prompt, UserInterface};

use super::spec::{render, InstallAction, ToolSpec};

/// What to do about one tool, given its detected version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<'a> {
    /// The detected version contains the target; leave it alone.
    UpToDate,

    /// A different version is installed; ask before replacing it.
    ConfirmOverwrite { current: &'a str },

    /// Nothing usable was detected; install without asking.
    Install,
}

/// Decide the action for a tool.
///
/// `current` is the trimmed output of the version command, or `None` when
/// the tool is not on PATH or its version command failed or printed nothing.
pub fn decide<'a>(current: Option<&'a str>, target: &str) -> Decision<'a> {
    match current.map(str::trim).filter(|c| !c.is_empty()) {
        Some(current) if current.contains(target.trim()) => Decision::UpToDate,
        Some(current) => Decision::ConfirmOverwrite { current },
        None => Decision::Install,
    }
}

/// Result of one successful ensure-installed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Already at the pinned version; nothing was touched.
    AlreadyAtTarget,

    /// A different version is installed and the operator declined to replace it.
    SkippedByOperator { current: String },

    /// The pinned version was downloaded and installed.
    Installed {
        /// Version string detected before the install, if any.
        previous: Option<String>,
        /// Whether `file` identified the installed binary as ELF.
        native: bool,
    },
}

/// Runs the ensure-installed workflow against the host.
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
    work_dir: PathBuf,
}

impl<'a> Installer<'a> {
    /// Create an installer that downloads into `work_dir`.
    pub fn new(runner: &'a dyn CommandRunner, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            work_dir: work_dir.into(),
        }
    }

    /// The directory receiving downloaded artifacts.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Detect the currently installed version of a tool.
    pub fn detect(&self, spec: &ToolSpec) -> Option<String> {
        let Some(path) = self.runner.resolve(spec.name) else {
            tracing::debug!("{} not found on PATH", spec.name);
            return None;
        };
        tracing::debug!("{} resolved to {}", spec.name, path.display());

        let version = self
            .runner
            .capture(&ExternalCommand::new(spec.name, spec.version_args.iter().copied()));
        if version.is_none() {
            tracing::debug!("{} is installed but reported no version", spec.name);
        }
        version
    }

    /// Make sure `spec` is installed, asking before replacing another version.
    pub fn ensure(&self, spec: &ToolSpec, ui: &mut dyn UserInterface) -> Result<InstallOutcome> {
        let current = self.detect(spec);

        match decide(current.as_deref(), spec.target_version) {
            Decision::UpToDate => {
                tracing::debug!("{} already at {}", spec.name, spec.target_version);
                return Ok(InstallOutcome::AlreadyAtTarget);
            }
            Decision::ConfirmOverwrite { current } => {
                ui.warning(&format!(
                    "{} is already installed (version {}). Target version: {}",
                    spec.name, current, spec.target_version
                ));
                let prompt = Prompt::confirm(
                    &format!("overwrite_{}", spec.name),
                    "Do you want to overwrite and install the new version?",
                );
                if !ui.confirm(&prompt)? {
                    return Ok(InstallOutcome::SkippedByOperator {
                        current: current.to_string(),
                    });
                }
            }
            Decision::Install => {}
        }

        let native = self.install(spec, ui)?;
        Ok(InstallOutcome::Installed {
            previous: current,
            native,
        })
    }

    fn install(&self, spec: &ToolSpec, ui: &mut dyn UserInterface) -> Result<bool> {
        // Refresh sudo credentials up front so the password prompt is not
        // drawn over by the spinner.
        if !self.runner.is_elevated() {
            self.runner
                .run(&ExternalCommand::new("sudo", ["-v"]).interactive())?;
        }

        let mut spinner = ui.start_spinner(&format!(
            "Installing {} {}...",
            spec.name, spec.target_version
        ));

        match self.install_steps(spec) {
            Ok(native) => {
                spinner.finish_success(&format!(
                    "{} {} installed to {}",
                    spec.name, spec.target_version, spec.install_path
                ));
                Ok(native)
            }
            Err(e) => {
                spinner.finish_error(&format!("Failed to install {}", spec.name));
                Err(e)
            }
        }
    }

    fn install_steps(&self, spec: &ToolSpec) -> Result<bool> {
        let mut stale = vec!["-f".to_string(), spec.install_path.to_string()];
        stale.extend(spec.transient_files().map(|f| self.display_path(f)));
        self.runner
            .run(&ExternalCommand::new("rm", stale).privileged())?;

        let artifact = self.work_dir.join(spec.artifact);
        let url = spec.download_url();
        tracing::debug!("Downloading {} from {}", spec.name, url);
        self.runner.run(&ExternalCommand::new(
            "curl",
            [
                "-fL".to_string(),
                url,
                "-o".to_string(),
                artifact.display().to_string(),
            ],
        ))?;
        verify_download(&artifact)?;

        for action in spec.procedure {
            self.runner.run(&self.action_command(spec, action))?;
        }

        Ok(self.is_native(spec.install_path))
    }

    fn action_command(&self, spec: &ToolSpec, action: &InstallAction) -> ExternalCommand {
        match action {
            InstallAction::MakeExecutable { file } => {
                ExternalCommand::new("chmod", ["+x".to_string(), self.display_path(file)])
            }
            InstallAction::Decompress { file } => {
                ExternalCommand::new("gunzip", ["-f".to_string(), self.display_path(file)])
            }
            InstallAction::Install {
                source,
                owner,
                mode,
            } => {
                let mut args = Vec::new();
                if let Some(owner) = *owner {
                    args.extend(["-o", owner, "-g", owner].map(String::from));
                }
                args.extend([
                    "-m".to_string(),
                    mode.to_string(),
                    self.display_path(source),
                    spec.install_path.to_string(),
                ]);
                ExternalCommand::new("install", args).privileged()
            }
            InstallAction::RunScript { env } => {
                let script = self.display_path(spec.artifact);
                env.iter().fold(
                    ExternalCommand::new(&script, Vec::<String>::new()),
                    |cmd, (key, value)| cmd.with_env(key, &render(value, spec.target_version)),
                )
            }
        }
    }

    /// Advisory check that the installed file is a native executable.
    fn is_native(&self, path: &str) -> bool {
        match self.runner.capture(&ExternalCommand::new("file", [path])) {
            Some(kind) => kind.contains("ELF"),
            None => {
                tracing::debug!("Could not determine file type of {}", path);
                false
            }
        }
    }

    fn display_path(&self, file: &str) -> String {
        self.work_dir.join(file).display().to_string()
    }
}

fn verify_download(artifact: &Path) -> Result<()> {
    match std::fs::metadata(artifact) {
        Ok(meta) if meta.len() > 0 => Ok(()),
        _ => Err(InstallError::DownloadFailed {
            artifact: artifact.to_path_buf(),
        }),
    }
}

/// Render an outcome as status lines.
pub fn report_outcome(spec: &ToolSpec, outcome: &InstallOutcome, ui: &mut dyn UserInterface) {
    match outcome {
        InstallOutcome::AlreadyAtTarget => ui.success(&format!(
            "{} is already at target version ({}), skipping installation.",
            spec.name, spec.target_version
        )),
        InstallOutcome::SkippedByOperator { current } => ui.success(&format!(
            "Skipping {} installation (keeping {})",
            spec.name, current
        )),
        InstallOutcome::Installed { previous, native } => {
            if let Some(previous) = previous {
                ui.message(&format!("  replaced: {}", previous));
            }
            if *native {
                ui.success(&format!("{} is a native executable", spec.install_path));
            } else {
                ui.warning(&format!(
                    "{} does not look like a native executable",
                    spec.install_path
                ));
            }
        }
    }
}
