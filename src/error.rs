//! Error types for MekiCopy operations.
//!
//! This module defines [`MekiError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `EnvironmentMissing` is the one error the installer recognizes and
//!   translates into guidance for the operator
//! - Package-manager failures are carried as `CommandFailed` with the raw
//!   exit code of the child process, never reinterpreted
//! - Use `anyhow::Error` (via `MekiError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for MekiCopy operations.
#[derive(Debug, Error)]
pub enum MekiError {
    /// The required runtime is not resolvable on the search path.
    #[error("Runtime not found: {runtime}")]
    EnvironmentMissing { runtime: String },

    /// A child process failed or could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The image handed to the OCR tool does not exist.
    #[error("Image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MekiError {
    /// Process exit code for this error.
    ///
    /// A failed child process hands its own status through unchanged; a
    /// child without a status (spawn failure, killed by a signal) and every
    /// other error map to `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            MekiError::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Result type alias for MekiCopy operations.
pub type Result<T> = std::result::Result<T, MekiError>;
