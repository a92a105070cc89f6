//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    work_dir: PathBuf,
    runner: Box<dyn CommandRunner>,
}

impl CommandDispatcher {
    /// Create a dispatcher that runs commands on the host.
    ///
    /// With `stream_output`, installer subprocesses write straight to the
    /// terminal.
    pub fn new(work_dir: PathBuf, stream_output: bool) -> Self {
        Self::with_runner(work_dir, Box::new(SystemRunner::new(stream_output)))
    }

    /// Create a dispatcher with a custom command runner.
    pub fn with_runner(work_dir: PathBuf, runner: Box<dyn CommandRunner>) -> Self {
        Self { work_dir, runner }
    }

    /// Get the work directory path.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = self.runner.as_ref();
        match &cli.command {
            Some(Commands::Run(args)) => {
                super::run::RunCommand::new(runner, &self.work_dir, args.clone()).execute(ui)
            }
            Some(Commands::Status(args)) => {
                super::status::StatusCommand::new(runner, args.clone()).execute(ui)
            }
            Some(Commands::Clean) => super::clean::CleanCommand::new(&self.work_dir).execute(ui),
            Some(Commands::List(args)) => super::list::ListCommand::new(args.clone()).execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => {
                super::run::RunCommand::new(runner, &self.work_dir, RunArgs::default()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn default_command_is_run() {
        let temp = TempDir::new().unwrap();
        let dispatcher =
            CommandDispatcher::with_runner(temp.path().to_path_buf(), Box::new(MockRunner::new()));
        let cli = Cli::parse_from(["install-tools"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.prompts_shown(), &["continue"]);
    }

    #[test]
    fn dispatches_clean_to_work_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("get_helm.sh"), b"#!/bin/sh").unwrap();
        let dispatcher =
            CommandDispatcher::with_runner(temp.path().to_path_buf(), Box::new(MockRunner::new()));
        let cli = Cli::parse_from(["install-tools", "clean"]);
        let mut ui = MockUI::new();

        dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(!temp.path().join("get_helm.sh").exists());
        assert_eq!(dispatcher.work_dir(), temp.path());
    }
}
