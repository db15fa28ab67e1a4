//! Install command implementation.
//!
//! `mekicopy install` (or plain `mekicopy`) upgrades pip and installs the
//! OCR packages into the configured runtime.

use crate::cli::args::InstallArgs;
use crate::config::InstallerConfig;
use crate::error::Result;
use crate::installer::{InstallContext, InstallOutcome, Installer};
use crate::ui::{messages, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::report_failure;

/// The install command implementation.
pub struct InstallCommand<'a> {
    config: &'a InstallerConfig,
    ctx: &'a InstallContext<'a>,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(config: &'a InstallerConfig, ctx: &'a InstallContext<'a>, args: InstallArgs) -> Self {
        Self { config, ctx, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InstallArgs {
        &self.args
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installer = Installer::new(self.config, self.ctx);
        ui.show_header(messages::install_header());

        let outcome = if self.args.dry_run {
            installer.dry_run()
        } else {
            installer.run(ui)
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
                ui.success(messages::install_complete());
                Ok(CommandResult::success())
            }
            Err(e) => match report_failure(&e, ui) {
                Some(result) => Ok(result),
                None => Err(e),
            },
        }
    }
}
