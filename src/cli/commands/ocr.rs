//! OCR command implementation.
//!
//! `mekicopy ocr <IMAGE>` runs the installed OCR tool on one image and
//! prints the recognized text to stdout. Progress goes to the spinner only,
//! so the output can be piped.

use crate::cli::args::OcrArgs;
use crate::config::InstallerConfig;
use crate::error::Result;
use crate::installer::InstallContext;
use crate::ocr::OcrRunner;
use crate::ui::{messages, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::report_failure;

/// The ocr command implementation.
pub struct OcrCommand<'a> {
    config: &'a InstallerConfig,
    ctx: &'a InstallContext<'a>,
    args: OcrArgs,
}

impl<'a> OcrCommand<'a> {
    /// Create a new ocr command.
    pub fn new(config: &'a InstallerConfig, ctx: &'a InstallContext<'a>, args: OcrArgs) -> Self {
        Self { config, ctx, args }
    }
}

impl Command for OcrCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = OcrRunner::new(self.config, self.ctx);
        let mut spinner = ui.start_spinner(&messages::recognizing(&self.args.image));

        let output = match runner.recognize(&self.args.image, self.args.raw) {
            Ok(output) => output,
            Err(e) => {
                spinner.finish_error(messages::recognition_failed());
                return match report_failure(&e, ui) {
                    Some(result) => Ok(result),
                    None => Err(e),
                };
            }
        };

        if output.success {
            spinner.finish_success(messages::recognized());
        } else {
            spinner.finish_error(messages::recognition_failed());
        }

        if !output.text.is_empty() {
            ui.output(&output.text);
        }

        if output.success {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(
                output.exit_code.filter(|code| *code != 0).unwrap_or(1),
            ))
        }
    }
}
