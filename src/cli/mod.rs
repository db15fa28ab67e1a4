//! Command-line interface for MekiCopy.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    BackendArgs, CheckArgs, Cli, Commands, CompletionsArgs, ConfigArgs, InstallArgs, OcrArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
