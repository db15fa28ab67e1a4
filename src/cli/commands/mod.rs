//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod backend;
pub mod check;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod install;
pub mod ocr;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::error::MekiError;
use crate::ui::{messages, UserInterface};

/// Explain a recognized domain failure and pick its exit code.
///
/// Returns `None` for errors the commands do not translate.
pub(crate) fn report_failure(err: &MekiError, ui: &mut dyn UserInterface) -> Option<CommandResult> {
    match err {
        MekiError::EnvironmentMissing { runtime } => {
            ui.message(&messages::runtime_missing(runtime));
            Some(CommandResult::failure(err.exit_code()))
        }
        MekiError::CommandFailed { command, code } => {
            ui.error(&messages::step_failed(command, *code));
            Some(CommandResult::failure(err.exit_code()))
        }
        MekiError::ImageNotFound { path } => {
            ui.error(&messages::image_not_found(path));
            Some(CommandResult::failure(err.exit_code()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    #[test]
    fn missing_runtime_prints_guidance() {
        let mut ui = MockUI::new();
        let err = MekiError::EnvironmentMissing {
            runtime: "python".to_string(),
        };

        let result = report_failure(&err, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("python.org"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn failed_step_keeps_child_code() {
        let mut ui = MockUI::new();
        let err = MekiError::CommandFailed {
            command: "python -m pip install mss".to_string(),
            code: Some(2),
        };

        let result = report_failure(&err, &mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("pip install mss"));
    }

    #[test]
    fn missing_image_is_one() {
        let mut ui = MockUI::new();
        let err = MekiError::ImageNotFound {
            path: PathBuf::from("shot.png"),
        };

        assert_eq!(report_failure(&err, &mut ui).unwrap().exit_code, 1);
        assert!(ui.has_error("shot.png"));
    }

    #[test]
    fn other_errors_pass_through() {
        let mut ui = MockUI::new();
        let err = MekiError::ConfigValidationError {
            message: "bad".to_string(),
        };
        assert!(report_failure(&err, &mut ui).is_none());
    }
}
