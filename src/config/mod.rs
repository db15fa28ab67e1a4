//! Installer configuration.
//!
//! - [`schema`] - [`InstallerConfig`] and the fixed package constants

pub mod schema;

pub use schema::{
    Backend, InstallerConfig, CPU_BACKEND_PACKAGE, DEFAULT_PACKAGES, DEFAULT_RUNTIME,
    GPU_BACKEND_PACKAGE, OCR_MODULE, PACKAGE_MANAGER,
};
