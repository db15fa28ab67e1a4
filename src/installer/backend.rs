//! Inference backend swap.
//!
//! Only one of the CPU and GPU ONNX runtime packages can be installed at a
//! time, so a swap removes the other one before installing the target.

use crate::config::{Backend, InstallerConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::InstallContext;
use super::plan::InstallPlan;
use super::InstallOutcome;

/// Swaps the installed inference backend.
pub struct BackendSwap<'a> {
    config: &'a InstallerConfig,
    ctx: &'a InstallContext<'a>,
    target: Backend,
}

impl<'a> BackendSwap<'a> {
    pub fn new(config: &'a InstallerConfig, ctx: &'a InstallContext<'a>, target: Backend) -> Self {
        Self {
            config,
            ctx,
            target,
        }
    }

    /// Package removed by the swap.
    pub fn from_package(&self) -> &str {
        self.config.backend_package(self.target.other())
    }

    /// Package installed by the swap.
    pub fn to_package(&self) -> &str {
        self.config.backend_package(self.target)
    }

    pub fn plan(&self) -> InstallPlan {
        InstallPlan::backend_swap(self.config, self.target)
    }

    /// Probe the runtime, then uninstall and install.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<InstallOutcome> {
        let runtime = self.ctx.require_runtime(&self.config.runtime)?;
        self.plan().execute(&runtime, self.ctx, ui)?;
        tracing::info!(backend = self.target.label(), "backend switched");
        Ok(InstallOutcome::Completed { runtime })
    }

    pub fn dry_run(&self) -> Result<InstallOutcome> {
        let runtime = self.ctx.require_runtime(&self.config.runtime)?;
        Ok(InstallOutcome::Planned {
            invocations: self.plan().invocations(&runtime),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MekiError;
    use crate::shell::{CommandOptions, CommandResult, Invocation};
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::ffi::OsString;
    use std::path::PathBuf;
    use std::time::Duration;

    fn found(_: &str) -> Option<PathBuf> {
        Some(PathBuf::from("python"))
    }

    fn never_run(_: &Invocation, _: &CommandOptions) -> Result<CommandResult> {
        unreachable!("nothing runs while naming packages")
    }

    #[test]
    fn package_names_follow_target() {
        let config = InstallerConfig::default();
        let ctx = InstallContext {
            resolve_runtime: &found,
            run: &never_run,
        };
        let swap = BackendSwap::new(&config, &ctx, Backend::Gpu);

        assert_eq!(swap.from_package(), "onnxruntime");
        assert_eq!(swap.to_package(), "onnxruntime-gpu");
    }

    #[test]
    fn gpu_swap_uninstalls_before_installing() {
        let calls = RefCell::new(Vec::<Vec<OsString>>::new());
        let run = |inv: &Invocation, _: &CommandOptions| {
            calls.borrow_mut().push(inv.args.clone());
            Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        };
        let ctx = InstallContext {
            resolve_runtime: &found,
            run: &run,
        };
        let config = InstallerConfig::default();

        BackendSwap::new(&config, &ctx, Backend::Gpu)
            .run(&mut MockUI::new())
            .unwrap();

        let calls = calls.borrow();
        assert_eq!(calls[0], ["-m", "pip", "uninstall", "-y", "onnxruntime"]);
        assert_eq!(calls[1], ["-m", "pip", "install", "onnxruntime-gpu"]);
    }

    #[test]
    fn failed_uninstall_stops_swap() {
        let calls = RefCell::new(0usize);
        let run = |_: &Invocation, _: &CommandOptions| {
            *calls.borrow_mut() += 1;
            Ok(CommandResult::failure(
                Some(5),
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        };
        let ctx = InstallContext {
            resolve_runtime: &found,
            run: &run,
        };
        let config = InstallerConfig::default();

        let err = BackendSwap::new(&config, &ctx, Backend::Cpu)
            .run(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, MekiError::CommandFailed { code: Some(5), .. }));
        assert_eq!(*calls.borrow(), 1);
    }
}
