//! Installer settings.
//!
//! Nothing here is read from disk. The defaults describe the MekiCopy
//! toolchain; the only override is the runtime, taken from the command line
//! or `MEKICOPY_RUNTIME`.

use serde::Serialize;

use crate::error::{MekiError, Result};

/// Runtime looked up on the search path when none is given.
pub const DEFAULT_RUNTIME: &str = "python";

/// Package upgraded before anything is installed.
pub const PACKAGE_MANAGER: &str = "pip";

/// Packages installed by `mekicopy install`, in order.
pub const DEFAULT_PACKAGES: [&str; 4] = ["meikiocr", "mss", "pillow", "pyperclip"];

/// Module run as `<runtime> -m <module> <image>` by `mekicopy ocr`.
pub const OCR_MODULE: &str = "meikiocr.cli";

/// Default (CPU) inference backend package.
pub const CPU_BACKEND_PACKAGE: &str = "onnxruntime";

/// GPU-accelerated inference backend package.
pub const GPU_BACKEND_PACKAGE: &str = "onnxruntime-gpu";

/// Inference backend used by the OCR tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// `onnxruntime`
    Cpu,
    /// `onnxruntime-gpu`
    Gpu,
}

impl Backend {
    /// The backend this one replaces.
    pub fn other(self) -> Self {
        match self {
            Backend::Cpu => Backend::Gpu,
            Backend::Gpu => Backend::Cpu,
        }
    }

    /// Short label for messages.
    pub fn label(self) -> &'static str {
        match self {
            Backend::Cpu => "CPU",
            Backend::Gpu => "GPU",
        }
    }
}

/// Resolved installer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallerConfig {
    /// Runtime name or path.
    pub runtime: String,

    /// Package manager module, run as `<runtime> -m <package_manager>`.
    pub package_manager: String,

    /// Packages installed after the package manager upgrade.
    pub packages: Vec<String>,

    /// OCR module invoked by `mekicopy ocr`.
    pub ocr_module: String,

    /// CPU backend package.
    pub cpu_backend: String,

    /// GPU backend package.
    pub gpu_backend: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            package_manager: PACKAGE_MANAGER.to_string(),
            packages: DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect(),
            ocr_module: OCR_MODULE.to_string(),
            cpu_backend: CPU_BACKEND_PACKAGE.to_string(),
            gpu_backend: GPU_BACKEND_PACKAGE.to_string(),
        }
    }
}

impl InstallerConfig {
    /// Apply a runtime override. `None` keeps the default.
    pub fn with_runtime(mut self, runtime: Option<&str>) -> Self {
        if let Some(runtime) = runtime {
            self.runtime = runtime.trim().to_string();
        }
        self
    }

    /// Package providing the given backend.
    pub fn backend_package(&self, backend: Backend) -> &str {
        match backend {
            Backend::Cpu => &self.cpu_backend,
            Backend::Gpu => &self.gpu_backend,
        }
    }

    /// Reject configurations no command can run with.
    pub fn validate(&self) -> Result<()> {
        if self.runtime.is_empty() {
            return Err(MekiError::ConfigValidationError {
                message: "runtime must not be empty".to_string(),
            });
        }
        if self.packages.is_empty() {
            return Err(MekiError::ConfigValidationError {
                message: "package list must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
