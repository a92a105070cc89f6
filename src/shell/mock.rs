//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without touching the host. It
//! records every command it is asked to run or capture and answers from
//! pre-configured tables.
//!
//! # Example
//!
//! ```
//! use install_tools::shell::{CommandRunner, ExternalCommand, MockRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.add_tool("kubectl");
//! runner.set_capture("kubectl version --client", "Client Version: v1.29.2");
//!
//! assert!(runner.resolve("kubectl").is_some());
//! let version = runner.capture(&ExternalCommand::new("kubectl", ["version", "--client"]));
//! assert_eq!(version.as_deref(), Some("Client Version: v1.29.2"));
//! assert!(runner.runs().is_empty());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{InstallError, Result};

use super::command::{CommandRunner, ExternalCommand};

/// Mock runner that records commands instead of executing them.
///
/// Downloads (`curl … -o <path>`) write the configured payload to the
/// output path so integrity checks see a real file.
#[derive(Debug)]
pub struct MockRunner {
    tools: HashMap<String, PathBuf>,
    captures: HashMap<String, String>,
    failures: Vec<String>,
    download_payload: Option<Vec<u8>>,
    elevated: bool,
    runs: RefCell<Vec<String>>,
    captured: RefCell<Vec<String>>,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRunner {
    /// Create a runner that behaves as root with nothing on PATH.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            captures: HashMap::new(),
            failures: Vec::new(),
            download_payload: None,
            elevated: true,
            runs: RefCell::new(Vec::new()),
            captured: RefCell::new(Vec::new()),
        }
    }

    /// Make a tool resolvable at `/usr/local/bin/<name>`.
    pub fn add_tool(&mut self, name: &str) {
        self.tools
            .insert(name.to_string(), PathBuf::from("/usr/local/bin").join(name));
    }

    /// Set the output returned when capturing the given command line.
    pub fn set_capture(&mut self, command_line: &str, output: &str) {
        self.captures
            .insert(command_line.to_string(), output.to_string());
    }

    /// Fail any `run` whose command line contains `fragment`.
    pub fn fail_when(&mut self, fragment: &str) {
        self.failures.push(fragment.to_string());
    }

    /// Bytes written to the `-o` target of every `curl` download.
    pub fn set_download_payload(&mut self, payload: &[u8]) {
        self.download_payload = Some(payload.to_vec());
    }

    /// Set whether the runner reports itself as root.
    pub fn set_elevated(&mut self, elevated: bool) {
        self.elevated = elevated;
    }

    /// Command lines passed to `run`, in order.
    pub fn runs(&self) -> Vec<String> {
        self.runs.borrow().clone()
    }

    /// Command lines passed to `capture`, in order.
    pub fn captures(&self) -> Vec<String> {
        self.captured.borrow().clone()
    }

    /// Check if any executed command line contains `fragment`.
    pub fn ran(&self, fragment: &str) -> bool {
        self.runs.borrow().iter().any(|r| r.contains(fragment))
    }

    fn write_download(&self, command: &ExternalCommand) -> Result<()> {
        let Some(payload) = &self.download_payload else {
            return Ok(());
        };
        let target = command
            .args
            .iter()
            .position(|a| a == "-o")
            .and_then(|i| command.args.get(i + 1));
        if let Some(target) = target {
            std::fs::write(target, payload)?;
        }
        Ok(())
    }
}

impl CommandRunner for MockRunner {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        self.tools.get(program).cloned()
    }

    fn capture(&self, command: &ExternalCommand) -> Option<String> {
        let line = command.to_string();
        self.captured.borrow_mut().push(line.clone());
        self.captures.get(&line).filter(|s| !s.is_empty()).cloned()
    }

    fn run(&self, command: &ExternalCommand) -> Result<()> {
        let line = command.to_string();
        self.runs.borrow_mut().push(line.clone());

        if self.failures.iter().any(|f| line.contains(f.as_str())) {
            return Err(InstallError::CommandFailed {
                command: line,
                code: Some(1),
                output: String::new(),
            });
        }

        if command.program == "curl" {
            self.write_download(command)?;
        }
        Ok(())
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_runs_in_order() {
        let runner = MockRunner::new();
        runner
            .run(&ExternalCommand::new("chmod", ["+x", "kubectl"]))
            .unwrap();
        runner
            .run(&ExternalCommand::new("rm", ["-f", "kubectl"]).privileged())
            .unwrap();

        assert_eq!(runner.runs(), ["chmod +x kubectl", "sudo rm -f kubectl"]);
        assert!(runner.ran("rm -f"));
    }

    #[test]
    fn unknown_capture_returns_none() {
        let runner = MockRunner::new();
        let out = runner.capture(&ExternalCommand::new("helm", ["version", "--short"]));
        assert!(out.is_none());
        assert_eq!(runner.captures(), ["helm version --short"]);
    }

    #[test]
    fn empty_capture_counts_as_none() {
        let mut runner = MockRunner::new();
        runner.set_capture("argo version --short", "");
        let out = runner.capture(&ExternalCommand::new("argo", ["version", "--short"]));
        assert!(out.is_none());
    }

    #[test]
    fn fail_when_matches_fragment() {
        let mut runner = MockRunner::new();
        runner.fail_when("gunzip");
        let err = runner
            .run(&ExternalCommand::new("gunzip", ["-f", "argo.gz"]))
            .unwrap_err();
        assert!(err.to_string().contains("gunzip -f argo.gz"));
    }

    #[test]
    fn curl_writes_payload_to_output_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("kubectl");
        let mut runner = MockRunner::new();
        runner.set_download_payload(b"\x7fELF");

        let cmd = ExternalCommand::new(
            "curl",
            [
                "-fsSL".to_string(),
                "https://example.invalid/kubectl".to_string(),
                "-o".to_string(),
                target.display().to_string(),
            ],
        );
        runner.run(&cmd).unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"\x7fELF");
    }

    #[test]
    fn resolves_only_added_tools() {
        let mut runner = MockRunner::new();
        runner.add_tool("helm");
        assert_eq!(
            runner.resolve("helm"),
            Some(PathBuf::from("/usr/local/bin/helm"))
        );
        assert!(runner.resolve("argo").is_none());
    }
}
