//! Check command implementation.
//!
//! `mekicopy check` reports whether the runtime resolves, without
//! installing anything.

use crate::cli::args::CheckArgs;
use crate::config::InstallerConfig;
use crate::error::{MekiError, Result};
use crate::installer::InstallContext;
use crate::ui::{messages, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    config: &'a InstallerConfig,
    ctx: &'a InstallContext<'a>,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(config: &'a InstallerConfig, ctx: &'a InstallContext<'a>, args: CheckArgs) -> Self {
        Self { config, ctx, args }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = self.ctx.probe(&self.config.runtime);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&probe).map_err(|e| MekiError::Other(e.into()))?;
            ui.output(&json);
        } else {
            match probe.path() {
                Some(path) => ui.success(&messages::runtime_found(probe.runtime(), path)),
                None => ui.message(&messages::runtime_missing(probe.runtime())),
            }
        }

        if probe.is_found() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
