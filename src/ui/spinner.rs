//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::MekiTheme;
use super::SpinnerHandle;

/// A progress spinner for long-running operations.
///
/// Draws to stderr, so stdout stays clean for OCR output.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: MekiTheme,
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.yellow} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn finished_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme: MekiTheme::detect(),
        }
    }

    #[cfg(test)]
    fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: MekiTheme::plain(),
        }
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.bar.set_style(finished_style());
        self.bar
            .finish_with_message(self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar.set_style(finished_style());
        self.bar.finish_with_message(self.theme.format_error(msg));
    }
}
