//! External command execution.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::error::{InstallError, Result};

use super::path::{parse_system_path, resolve_tool_path};
use super::platform::is_elevated;

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    /// Program name or path.
    pub program: String,

    /// Arguments, passed verbatim (no shell interpretation).
    pub args: Vec<String>,

    /// Extra environment variables.
    pub env: Vec<(String, String)>,

    /// Needs root; prefixed with `sudo` unless already elevated.
    pub privileged: bool,

    /// Attach to the terminal (stdio inherited) even when output is captured.
    pub interactive: bool,
}

impl ExternalCommand {
    /// Create a command from a program and its arguments.
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            env: Vec::new(),
            privileged: false,
            interactive: false,
        }
    }

    /// Mark the command as requiring root.
    pub fn privileged(mut self) -> Self {
        self.privileged = true;
        self
    }

    /// Mark the command as needing the terminal.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Add an environment variable.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Whether the command is executed through `sudo`.
    pub fn uses_sudo(&self, elevated: bool) -> bool {
        self.privileged && !elevated
    }

    /// The command line actually executed, as used in diagnostics.
    ///
    /// Unlike `Display`, this drops the `sudo` prefix when already elevated.
    pub fn command_line(&self, elevated: bool) -> String {
        let mut parts = Vec::new();
        if !self.uses_sudo(elevated) {
            parts.extend(self.env.iter().map(|(k, v)| format!("{}={}", k, v)));
        }
        parts.extend(self.argv(elevated));
        parts.join(" ")
    }

    /// The argument vector actually executed.
    ///
    /// `sudo` resets the environment, so extra variables are forwarded
    /// through `env` when the command is run through it.
    pub fn argv(&self, elevated: bool) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + self.env.len() + 3);
        if self.uses_sudo(elevated) {
            argv.push("sudo".to_string());
            if !self.env.is_empty() {
                argv.push("env".to_string());
                argv.extend(self.env.iter().map(|(k, v)| format!("{}={}", k, v)));
            }
        }
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.privileged {
            write!(f, "sudo ")?;
        }
        for (key, value) in &self.env {
            write!(f, "{}={} ", key, value)?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Executes external commands on behalf of the installer.
///
/// This trait allows mocking the host system in tests.
pub trait CommandRunner {
    /// Locate an executable on the search path.
    fn resolve(&self, program: &str) -> Option<PathBuf>;

    /// Run a command and return its trimmed stdout.
    ///
    /// Returns `None` when the command cannot be spawned, exits non-zero,
    /// or prints nothing.
    fn capture(&self, command: &ExternalCommand) -> Option<String>;

    /// Run a command to completion, failing on a non-zero exit.
    fn run(&self, command: &ExternalCommand) -> Result<()>;

    /// Whether privileged commands can run without `sudo`.
    fn is_elevated(&self) -> bool;
}

/// Runs commands on the host with `std::process::Command`.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    stream_output: bool,
    elevated: bool,
}

impl SystemRunner {
    /// Create a runner.
    ///
    /// With `stream_output`, subprocess output goes straight to the
    /// terminal; otherwise it is captured and only shown on failure.
    pub fn new(stream_output: bool) -> Self {
        Self {
            stream_output,
            elevated: is_elevated(),
        }
    }

    /// Treat the process as root, so privileged commands skip `sudo`.
    #[cfg(test)]
    pub(crate) fn as_root(mut self) -> Self {
        self.elevated = true;
        self
    }

    fn build(&self, command: &ExternalCommand) -> Command {
        let argv = command.argv(self.elevated);
        let mut cmd = Command::new(&argv[0]);
        cmd.args(&argv[1..]);

        if !command.uses_sudo(self.elevated) {
            for (key, value) in &command.env {
                cmd.env(key, value);
            }
        }

        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        resolve_tool_path(program, &parse_system_path())
    }

    fn capture(&self, command: &ExternalCommand) -> Option<String> {
        let output = self
            .build(command)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            tracing::debug!(
                "`{}` exited with {:?}",
                command.command_line(self.elevated),
                output.status.code()
            );
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            None
        } else {
            Some(stdout)
        }
    }

    fn run(&self, command: &ExternalCommand) -> Result<()> {
        let start = Instant::now();
        let line = command.command_line(self.elevated);
        tracing::debug!("Running `{}`", line);

        let mut cmd = self.build(command);

        let (code, success, output) = if self.stream_output || command.interactive {
            let status = cmd
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| spawn_failure(&line, e))?;
            (status.code(), status.success(), String::new())
        } else {
            let output = cmd
                .stdin(Stdio::null())
                .output()
                .map_err(|e| spawn_failure(&line, e))?;
            let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            (output.status.code(), output.status.success(), combined)
        };

        tracing::debug!("`{}` finished in {:?}", line, start.elapsed());

        if success {
            Ok(())
        } else {
            Err(InstallError::CommandFailed {
                command: line,
                code,
                output: output.trim_end().to_string(),
            })
        }
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }
}

fn spawn_failure(line: &str, err: std::io::Error) -> InstallError {
    InstallError::CommandFailed {
        command: line.to_string(),
        code: None,
        output: err.to_string(),
    }
}
