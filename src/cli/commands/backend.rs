//! Backend command implementation.
//!
//! `mekicopy backend <cpu|gpu>` swaps the ONNX runtime package the OCR tool
//! runs on. The swap removes a package, so it asks first.

use crate::cli::args::BackendArgs;
use crate::config::InstallerConfig;
use crate::error::{MekiError, Result};
use crate::installer::{BackendSwap, InstallContext, InstallOutcome};
use crate::ui::{messages, Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::report_failure;

/// The backend command implementation.
pub struct BackendCommand<'a> {
    config: &'a InstallerConfig,
    ctx: &'a InstallContext<'a>,
    args: BackendArgs,
}

impl<'a> BackendCommand<'a> {
    /// Create a new backend command.
    pub fn new(config: &'a InstallerConfig, ctx: &'a InstallContext<'a>, args: BackendArgs) -> Self {
        Self { config, ctx, args }
    }

    fn confirmed(&self, swap: &BackendSwap<'_>, ui: &mut dyn UserInterface) -> Result<bool> {
        if self.args.yes || self.args.dry_run {
            return Ok(true);
        }
        let prompt = Prompt::new(
            "swap_backend",
            messages::backend_swap_question(swap.from_package(), swap.to_package()),
            false,
        );
        ui.confirm(&prompt)
    }
}

fn reported(e: MekiError, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    match report_failure(&e, ui) {
        Some(result) => Ok(result),
        None => Err(e),
    }
}

impl Command for BackendCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let swap = BackendSwap::new(self.config, self.ctx, self.args.target);

        // A missing runtime is reported before anything is asked.
        if let Err(e) = self.ctx.require_runtime(&self.config.runtime) {
            return reported(e, ui);
        }

        if !self.confirmed(&swap, ui)? {
            ui.warning(messages::cancelled());
            if !ui.is_interactive() {
                ui.message(messages::confirm_with_yes());
            }
            return Ok(CommandResult::failure(1));
        }

        let outcome = if self.args.dry_run {
            swap.dry_run()
        } else {
            swap.run(ui)
        };

        match outcome {
            Ok(InstallOutcome::Planned { invocations }) => {
                ui.message(messages::dry_run_notice());
                for invocation in &invocations {
                    ui.output(&invocation.to_string());
                }
                Ok(CommandResult::success())
            }
            Ok(InstallOutcome::Completed { .. }) => {
                ui.success(&messages::backend_switched(self.args.target));
                Ok(CommandResult::success())
            }
            Err(e) => reported(e, ui),
        }
    }
}
