//! Config command implementation.
//!
//! The `mekicopy config` command shows the resolved installer settings.

use crate::cli::args::ConfigArgs;
use crate::config::InstallerConfig;
use crate::error::{MekiError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand<'a> {
    config: &'a InstallerConfig,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(config: &'a InstallerConfig, args: ConfigArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.config.validate()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(self.config)
                .map_err(|e| MekiError::Other(e.into()))?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        let c = self.config;
        ui.output(&format!("runtime: {}", c.runtime));
        ui.output(&format!("package_manager: {}", c.package_manager));
        ui.output(&format!("packages: {}", c.packages.join(" ")));
        ui.output(&format!("ocr_module: {}", c.ocr_module));
        ui.output(&format!("cpu_backend: {}", c.cpu_backend));
        ui.output(&format!("gpu_backend: {}", c.gpu_backend));

        Ok(CommandResult::success())
    }
}
