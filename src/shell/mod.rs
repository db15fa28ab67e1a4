//! Child process execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult, Invocation};
pub use platform::is_ci;
