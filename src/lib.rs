//! MekiCopy - installs the MekiCopy OCR toolchain into a Python runtime.
//!
//! The installer checks that the runtime can be found, upgrades its package
//! manager and installs the OCR packages. The same plumbing launches the
//! installed OCR tool on an image and swaps its inference backend.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Installer settings and defaults
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Install plan and its execution
//! - [`ocr`] - Launching the installed OCR tool
//! - [`requirements`] - Runtime lookup on the search path
//! - [`shell`] - Child process execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use mekicopy::config::InstallerConfig;
//! use mekicopy::installer::InstallPlan;
//!
//! let plan = InstallPlan::install(&InstallerConfig::default());
//! let commands: Vec<String> = plan
//!     .invocations(Path::new("python"))
//!     .iter()
//!     .map(|i| i.to_string())
//!     .collect();
//! assert_eq!(commands[0], "python -m pip install --upgrade pip");
//! assert_eq!(commands[1], "python -m pip install meikiocr mss pillow pyperclip");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod ocr;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{MekiError, Result};
