//! Ordered package manager steps.
//!
//! A plan is built from the config without touching the system, so it can
//! be previewed (`--dry-run`) and asserted on in tests. Executing it is
//! strictly sequential: each step blocks until the child exits, and the
//! first failing step stops the plan.

use std::path::Path;

use crate::config::{Backend, InstallerConfig};
use crate::error::{MekiError, Result};
use crate::shell::{CommandOptions, Invocation};
use crate::ui::{messages, UserInterface};

use super::context::InstallContext;

/// What a step asks the package manager to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// `pip install --upgrade pip`
    UpgradePackageManager,
    /// `pip install <packages>`
    Install,
    /// `pip uninstall -y <packages>`
    Uninstall,
}

/// One package manager invocation, minus the runtime path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    /// Step kind.
    pub kind: StepKind,
    /// Packages the step operates on.
    pub packages: Vec<String>,
    /// Arguments passed to the runtime.
    pub args: Vec<String>,
}

impl PlanStep {
    fn new(kind: StepKind, package_manager: &str, packages: Vec<String>) -> Self {
        let mut args = vec!["-m".to_string(), package_manager.to_string()];
        match kind {
            StepKind::UpgradePackageManager => {
                args.push("install".to_string());
                args.push("--upgrade".to_string());
            }
            StepKind::Install => args.push("install".to_string()),
            StepKind::Uninstall => {
                args.push("uninstall".to_string());
                args.push("-y".to_string());
            }
        }
        args.extend(packages.iter().cloned());
        Self {
            kind,
            packages,
            args,
        }
    }

    /// Progress line shown before the step runs.
    pub fn description(&self) -> String {
        match self.kind {
            StepKind::UpgradePackageManager => {
                messages::upgrading_package_manager(&self.packages.join(" "))
            }
            StepKind::Install => messages::installing_packages(&self.packages),
            StepKind::Uninstall => messages::uninstalling_package(&self.packages.join(" ")),
        }
    }

    /// Bind the step to a resolved runtime.
    pub fn invocation(&self, runtime: &Path) -> Invocation {
        Invocation::new(runtime, self.args.clone())
    }
}

/// An ordered list of package manager steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    steps: Vec<PlanStep>,
}

impl InstallPlan {
    /// Upgrade the package manager, then install the configured packages.
    pub fn install(config: &InstallerConfig) -> Self {
        let pm = &config.package_manager;
        Self {
            steps: vec![
                PlanStep::new(StepKind::UpgradePackageManager, pm, vec![pm.clone()]),
                PlanStep::new(StepKind::Install, pm, config.packages.clone()),
            ],
        }
    }

    /// Remove the other backend, then install `target`.
    pub fn backend_swap(config: &InstallerConfig, target: Backend) -> Self {
        let pm = &config.package_manager;
        let from = config.backend_package(target.other()).to_string();
        let to = config.backend_package(target).to_string();
        Self {
            steps: vec![
                PlanStep::new(StepKind::Uninstall, pm, vec![from]),
                PlanStep::new(StepKind::Install, pm, vec![to]),
            ],
        }
    }

    /// The steps in execution order.
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Every step bound to `runtime`, in order.
    pub fn invocations(&self, runtime: &Path) -> Vec<Invocation> {
        self.steps.iter().map(|s| s.invocation(runtime)).collect()
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// A failing step is returned as `CommandFailed` carrying the child's
    /// own exit code; nothing after it runs.
    pub fn execute(
        &self,
        runtime: &Path,
        ctx: &InstallContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let total = self.steps.len();
        let options = if ui.output_mode().shows_command_output() {
            CommandOptions::inherited()
        } else {
            CommandOptions::captured()
        };

        for (index, step) in self.steps.iter().enumerate() {
            let invocation = step.invocation(runtime);
            ui.show_progress(index + 1, total);
            ui.message(&step.description());
            tracing::info!(step = ?step.kind, command = %invocation, "running step");

            let result = (ctx.run)(&invocation, &options)?;
            if !result.success {
                tracing::warn!(
                    step = ?step.kind,
                    code = ?result.exit_code,
                    "step failed, stopping"
                );
                let captured = result.stderr.trim();
                if !captured.is_empty() {
                    ui.message(captured);
                }
                return Err(MekiError::CommandFailed {
                    command: invocation.to_string(),
                    code: result.exit_code,
                });
            }
        }

        Ok(())
    }
}
