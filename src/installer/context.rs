//! Mockable process dependencies.

use std::path::{Path, PathBuf};

use crate::error::{MekiError, Result};
use crate::requirements::RuntimeProbe;
use crate::shell::{execute, CommandOptions, CommandResult, Invocation};

/// Mockable dependencies shared by the installer, the backend swap and the
/// OCR launcher.
pub struct InstallContext<'a> {
    /// Resolve a runtime name or path to an executable.
    pub resolve_runtime: &'a dyn Fn(&str) -> Option<PathBuf>,
    /// Run a child process to completion.
    pub run: &'a dyn Fn(&Invocation, &CommandOptions) -> Result<CommandResult>,
}

impl InstallContext<'_> {
    /// Probe for the runtime.
    pub fn probe(&self, runtime: &str) -> RuntimeProbe {
        RuntimeProbe::from_resolved(runtime, (self.resolve_runtime)(runtime))
    }

    /// Resolve the runtime or fail with `EnvironmentMissing`.
    ///
    /// Must succeed before any package manager invocation is attempted.
    pub fn require_runtime(&self, runtime: &str) -> Result<PathBuf> {
        match self.probe(runtime).path() {
            Some(path) => {
                tracing::debug!(runtime, path = %path.display(), "runtime resolved");
                Ok(path.to_path_buf())
            }
            None => {
                tracing::warn!(runtime, "runtime not found on PATH");
                Err(MekiError::EnvironmentMissing {
                    runtime: runtime.to_string(),
                })
            }
        }
    }
}

fn resolve_on_system_path(runtime: &str) -> Option<PathBuf> {
    RuntimeProbe::run(runtime).path().map(Path::to_path_buf)
}

/// Build the default `InstallContext` for production use.
pub fn default_context() -> InstallContext<'static> {
    InstallContext {
        resolve_runtime: &resolve_on_system_path,
        run: &execute,
    }
}
