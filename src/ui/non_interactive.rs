//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::theme::MekiTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Status goes to stdout, spinner chatter and errors to stderr. Prompts are
/// answered with their default.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn output(&mut self, text: &str) {
        println!("{}", text);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        tracing::debug!(key = %prompt.key, answer = prompt.default, "prompt answered with default");
        Ok(prompt.default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        eprintln!("  {}", message);
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        println!("[{}/{}]", current, total);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only prints its final line (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        eprintln!("{}", MekiTheme::plain().format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", MekiTheme::plain().format_error(msg));
    }
}
