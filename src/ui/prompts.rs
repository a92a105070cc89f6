//! Interactive prompts.

use console::Term;
use dialoguer::Input;

use crate::error::{InstallError, Result};

use super::Prompt;

/// Convert dialoguer errors to InstallError.
fn map_dialoguer_err(e: dialoguer::Error) -> InstallError {
    InstallError::Io(e.into())
}

/// Interpret a typed answer.
///
/// Only `y` and `yes` (any case, surrounding whitespace ignored) are
/// affirmative; everything else, including an empty line, is a no.
pub fn parse_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask a yes/no question on the terminal.
///
/// Free-form line input is used instead of a key-press confirm so that any
/// unrecognised answer counts as "no" rather than re-prompting.
pub fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<bool> {
    let answer: String = Input::new()
        .with_prompt(format!("{} {}", prompt.question, prompt.hint()))
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)?;

    if answer.trim().is_empty() {
        return Ok(prompt.default);
    }
    Ok(parse_confirmation(&answer))
}
