//! Line-based UI for piped input, CI and headless environments.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::error::Result;

use super::theme::ToolsTheme;
use super::{parse_confirmation, OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "INSTALL_TOOLS_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered, in order, by an `INSTALL_TOOLS_PROMPT_<KEY>`
/// environment variable, by one line read from the input, or by the
/// prompt's default when the input is exhausted.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    input: Box<dyn BufRead>,
    theme: ToolsTheme,
}

impl NonInteractiveUI {
    /// Create a UI reading answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
            input: Box::new(std::io::BufReader::new(std::io::stdin())),
            theme: ToolsTheme::plain(),
        }
    }

    /// Create with explicit overrides and input (for testing).
    pub fn with_input(
        mode: OutputMode,
        overrides: HashMap<String, String>,
        input: Box<dyn BufRead>,
    ) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            input,
            theme: ToolsTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn info(&mut self, msg: &str) {
        println!("{}", self.theme.format_info(msg));
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            tracing::debug!("Prompt '{}' answered by {}", prompt.key, env_key);
            return Ok(parse_confirmation(value));
        }

        print!("{} {}: ", prompt.question, prompt.hint());
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF: nobody is there to answer
            println!();
            return Ok(prompt.default);
        }

        if line.trim().is_empty() {
            return Ok(prompt.default);
        }
        Ok(parse_confirmation(&line))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(LineSpinner {
            theme: self.theme.clone(),
        })
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", self.theme.format_header(title));
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        eprintln!("    ┌─ Command ──────────────────────────");
        eprintln!("    │ {}", command);
        if !output.is_empty() {
            eprintln!("    ├─ Output ───────────────────────────");
            for line in output.lines() {
                eprintln!("    │ {}", line);
            }
        }
        eprintln!("    └────────────────────────────────────");
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints only its final line.
struct LineSpinner {
    theme: ToolsTheme,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
