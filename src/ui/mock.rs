//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use install_tools::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("overwrite_helm", "y");
//!
//! assert!(ui.confirm(&Prompt::confirm("overwrite_helm", "Overwrite?")).unwrap());
//! ui.success("helm installed");
//!
//! assert_eq!(ui.prompts_shown(), &["overwrite_helm"]);
//! assert!(ui.has_success("helm installed"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

use super::{parse_confirmation, OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    infos: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    error_blocks: Vec<(String, String)>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
    /// Fallback response for any prompt key not in `prompt_responses`.
    default_prompt_response: Option<String>,
    spinner_log: Rc<RefCell<Vec<(SpinnerStatus, String)>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the typed answer for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Set a typed answer for any prompt key not explicitly configured.
    pub fn set_default_prompt_response(&mut self, response: &str) {
        self.default_prompt_response = Some(response.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured info notices.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all captured error blocks as (command, output).
    pub fn error_blocks(&self) -> &[(String, String)] {
        &self.error_blocks
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// How every spinner finished, in order.
    pub fn spinner_finishes(&self) -> Vec<(SpinnerStatus, String)> {
        self.spinner_log.borrow().clone()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific info notice was shown.
    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        self.prompts_shown.push(prompt.key.clone());

        let response = self
            .prompt_responses
            .get(&prompt.key)
            .or(self.default_prompt_response.as_ref());

        Ok(match response {
            Some(r) if r.trim().is_empty() => prompt.default,
            Some(r) => parse_confirmation(r),
            None => prompt.default,
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new(Rc::clone(&self.spinner_log)))
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        self.error_blocks
            .push((command.to_string(), output.to_string()));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

/// Mock spinner that reports its finish back to the owning `MockUI`.
#[derive(Debug)]
pub struct MockSpinner {
    log: Rc<RefCell<Vec<(SpinnerStatus, String)>>>,
}

impl MockSpinner {
    fn new(log: Rc<RefCell<Vec<(SpinnerStatus, String)>>>) -> Self {
        Self { log }
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.log
            .borrow_mut()
            .push((SpinnerStatus::Success, msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.log
            .borrow_mut()
            .push((SpinnerStatus::Error, msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");
        ui.info("Removed temporary file: kubectl");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert!(ui.has_info("kubectl"));
    }

    #[test]
    fn unanswered_prompt_uses_default() {
        let mut ui = MockUI::new();
        let answer = ui.confirm(&Prompt::confirm("continue", "Go?")).unwrap();
        assert!(!answer);
        assert_eq!(ui.prompts_shown(), &["continue"]);
    }

    #[test]
    fn responses_are_parsed_like_typed_input() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("a", "YES");
        ui.set_prompt_response("b", "nope");
        assert!(ui.confirm(&Prompt::confirm("a", "?")).unwrap());
        assert!(!ui.confirm(&Prompt::confirm("b", "?")).unwrap());
    }

    #[test]
    fn default_prompt_response_applies_to_unknown_keys() {
        let mut ui = MockUI::new();
        ui.set_default_prompt_response("y");
        assert!(ui.confirm(&Prompt::confirm("anything", "?")).unwrap());
    }

    #[test]
    fn spinner_finishes_are_recorded() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Installing argo...");
        spinner.finish_error("argo failed");

        assert_eq!(ui.spinners(), &["Installing argo..."]);
        assert_eq!(
            ui.spinner_finishes(),
            vec![(SpinnerStatus::Error, "argo failed".to_string())]
        );
    }

    #[test]
    fn error_blocks_are_recorded() {
        let mut ui = MockUI::new();
        ui.show_error_block("gunzip -f argo.gz", "not in gzip format");
        assert_eq!(
            ui.error_blocks(),
            &[("gunzip -f argo.gz".to_string(), "not in gzip format".to_string())]
        );
    }
}
