//! Runtime dependency installation.
//!
//! The installer probes for the runtime, then runs the install plan:
//! upgrade the package manager, then install the OCR packages. The probe
//! always comes first, so a missing runtime never reaches the package
//! manager.

pub mod backend;
pub mod context;
pub mod plan;

pub use backend::BackendSwap;
pub use context::{default_context, InstallContext};
pub use plan::{InstallPlan, PlanStep, StepKind};

use std::path::PathBuf;

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::shell::Invocation;
use crate::ui::UserInterface;

/// What a successful installer run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Every step ran and succeeded.
    Completed {
        /// The runtime the steps ran under.
        runtime: PathBuf,
    },
    /// Dry run: the steps that would have run.
    Planned {
        /// Invocations in execution order.
        invocations: Vec<Invocation>,
    },
}

/// Installs the OCR packages into the configured runtime.
pub struct Installer<'a> {
    config: &'a InstallerConfig,
    ctx: &'a InstallContext<'a>,
}

impl<'a> Installer<'a> {
    /// Create an installer over `config`.
    pub fn new(config: &'a InstallerConfig, ctx: &'a InstallContext<'a>) -> Self {
        Self { config, ctx }
    }

    /// The steps this installer runs.
    pub fn plan(&self) -> InstallPlan {
        InstallPlan::install(self.config)
    }

    /// Probe the runtime, then run every step.
    ///
    /// Returns `EnvironmentMissing` before anything runs when the runtime
    /// cannot be resolved, and `CommandFailed` for the first failing step.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<InstallOutcome> {
        let runtime = self.ctx.require_runtime(&self.config.runtime)?;
        self.plan().execute(&runtime, self.ctx, ui)?;
        tracing::info!(runtime = %runtime.display(), "install finished");
        Ok(InstallOutcome::Completed { runtime })
    }

    /// Probe the runtime and return the plan without running it.
    pub fn dry_run(&self) -> Result<InstallOutcome> {
        let runtime = self.ctx.require_runtime(&self.config.runtime)?;
        Ok(InstallOutcome::Planned {
            invocations: self.plan().invocations(&runtime),
        })
    }
}
