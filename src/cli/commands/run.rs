//! The `run` command: probe, confirm, install, summarize, clean up.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::environment::{gather, OS_RELEASE_PATH};
use crate::error::{InstallError, Result};
use crate::shell::CommandRunner;
use crate::tools::{
    cleanup, collect_versions, render_versions, report_outcome, select, transient_artifacts,
    Installer,
};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Exit code for a usage error such as an unknown tool name.
const USAGE_EXIT_CODE: i32 = 2;

/// The run command implementation.
pub struct RunCommand<'a> {
    runner: &'a dyn CommandRunner,
    work_dir: PathBuf,
    os_release: PathBuf,
    args: RunArgs,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(runner: &'a dyn CommandRunner, work_dir: &Path, args: RunArgs) -> Self {
        Self {
            runner,
            work_dir: work_dir.to_path_buf(),
            os_release: PathBuf::from(OS_RELEASE_PATH),
            args,
        }
    }

    /// Read OS metadata from a different file.
    pub fn with_os_release(mut self, path: impl Into<PathBuf>) -> Self {
        self.os_release = path.into();
        self
    }

    fn show_system_info(&self, ui: &mut dyn UserInterface) {
        let info = gather(self.runner, &self.os_release);
        ui.message(&format!("Distro: {}", info.distro));
        ui.message(&format!("Kernel: {}", info.kernel));
        ui.message(&format!("Arch:   {}", info.arch));
        ui.message("");

        if !info.is_amd64() {
            ui.warning(&format!(
                "Downloads are built for linux/amd64; this host reports '{}'",
                info.arch
            ));
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tools = match select(&self.args.only) {
            Ok(tools) => tools,
            Err(e @ InstallError::UnknownTool { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(USAGE_EXIT_CODE));
            }
            Err(e) => return Err(e),
        };

        ui.show_header("Automatic installation of pinned cluster tools");
        self.show_system_info(ui);

        let proceed = ui.confirm(&Prompt::confirm(
            "continue",
            "Do you want to continue with the installation?",
        ))?;
        if !proceed {
            ui.message("Installation aborted.");
            return Ok(CommandResult::success());
        }

        let installer = Installer::new(self.runner, &self.work_dir);
        for spec in &tools {
            match installer.ensure(spec, ui) {
                Ok(outcome) => report_outcome(spec, &outcome, ui),
                Err(e) => {
                    if let InstallError::CommandFailed {
                        command, output, ..
                    } = &e
                    {
                        if !output.is_empty() {
                            ui.show_error_block(command, output);
                        }
                    }
                    return Err(e);
                }
            }
        }

        ui.message("");
        ui.show_header("Summary (versions)");
        render_versions(&collect_versions(self.runner, &tools), ui);

        if !self.args.keep_artifacts {
            cleanup(&self.work_dir, &transient_artifacts(), ui);
        }

        ui.message("");
        ui.success("All tools are ready to use!");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn os_release(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("os-release");
        std::fs::write(&path, "PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\n").unwrap();
        path
    }

    fn all_at_target() -> MockRunner {
        let mut runner = MockRunner::new();
        for (name, command, version) in [
            ("kubectl", "kubectl version --client", "Client Version: v1.34.0"),
            ("helm", "helm version --short", "v3.14.1+ge4b5d6a"),
            ("minikube", "minikube version", "minikube version: v1.32.0"),
            ("argo", "argo version --short", "argo: v3.7.1"),
        ] {
            runner.add_tool(name);
            runner.set_capture(command, version);
        }
        runner.set_capture("kubectl version --client=true", "Client Version: v1.34.0");
        runner.set_capture("uname -m", "x86_64");
        runner
    }

    #[test]
    fn declining_aborts_cleanly() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.set_prompt_response("continue", "n");

        let result = RunCommand::new(&runner, temp.path(), RunArgs::default())
            .with_os_release(os_release(&temp))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.has_message("Installation aborted."));
        assert!(ui.has_message("Debian GNU/Linux 12 (bookworm)"));
        assert!(runner.runs().is_empty());
    }

    #[test]
    fn everything_at_target_mutates_nothing() {
        let temp = TempDir::new().unwrap();
        let runner = all_at_target();
        let mut ui = MockUI::new();
        ui.set_prompt_response("continue", "y");

        let result = RunCommand::new(&runner, temp.path(), RunArgs::default())
            .with_os_release(os_release(&temp))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(runner.runs().is_empty());
        assert_eq!(ui.headers()[1], "Summary (versions)");
        assert!(ui.has_success("All tools are ready to use!"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn unknown_tool_is_a_usage_error() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        let args = RunArgs {
            only: vec!["terraform".into()],
            keep_artifacts: false,
        };

        let result = RunCommand::new(&runner, temp.path(), args)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("terraform"));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn failed_command_output_is_shown_then_propagated() {
        let temp = TempDir::new().unwrap();
        let mut runner = MockRunner::new();
        runner.set_download_payload(b"payload");
        runner.fail_when("chmod");
        let mut ui = MockUI::new();
        ui.set_prompt_response("continue", "y");
        let args = RunArgs {
            only: vec!["kubectl".into()],
            keep_artifacts: false,
        };

        let err = RunCommand::new(&runner, temp.path(), args)
            .with_os_release(os_release(&temp))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, InstallError::CommandFailed { .. }));
        assert!(!ui.has_success("All tools are ready to use!"));
    }

    #[test]
    fn artifacts_removed_after_install() {
        let temp = TempDir::new().unwrap();
        let mut runner = MockRunner::new();
        runner.set_download_payload(b"payload");
        let mut ui = MockUI::new();
        ui.set_prompt_response("continue", "yes");
        let args = RunArgs {
            only: vec!["minikube".into()],
            keep_artifacts: false,
        };

        RunCommand::new(&runner, temp.path(), args)
            .with_os_release(os_release(&temp))
            .execute(&mut ui)
            .unwrap();

        assert!(!temp.path().join("minikube-linux-amd64").exists());
        assert!(ui.has_info("minikube-linux-amd64"));
    }

    #[test]
    fn keep_artifacts_skips_cleanup() {
        let temp = TempDir::new().unwrap();
        let mut runner = MockRunner::new();
        runner.set_download_payload(b"payload");
        let mut ui = MockUI::new();
        ui.set_prompt_response("continue", "y");
        let args = RunArgs {
            only: vec!["minikube".into()],
            keep_artifacts: true,
        };

        RunCommand::new(&runner, temp.path(), args)
            .with_os_release(os_release(&temp))
            .execute(&mut ui)
            .unwrap();

        assert!(temp.path().join("minikube-linux-amd64").exists());
    }

    #[test]
    fn non_amd64_host_is_warned_about() {
        let temp = TempDir::new().unwrap();
        let mut runner = MockRunner::new();
        runner.set_capture("uname -m", "aarch64");
        let mut ui = MockUI::new();

        RunCommand::new(&runner, temp.path(), RunArgs::default())
            .with_os_release(os_release(&temp))
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_warning("aarch64"));
    }
}
