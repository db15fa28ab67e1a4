//! Interactive prompts.

use console::Term;
use dialoguer::Confirm;

use crate::error::{MekiError, Result};

use super::Prompt;

/// Convert dialoguer errors to MekiError.
fn map_dialoguer_err(e: dialoguer::Error) -> MekiError {
    MekiError::Io(e.into())
}

/// Ask a yes/no question on the terminal.
pub fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<bool> {
    Confirm::new()
        .with_prompt(&prompt.question)
        .default(prompt.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
