//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::config::InstallerConfig;
use crate::error::Result;
use crate::installer::InstallContext;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Domain failures the command knows how to explain (missing runtime,
    /// failed package manager step) come back as a failed
    /// [`CommandResult`]; anything else is an `Err`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    config: InstallerConfig,
    ctx: InstallContext<'a>,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher over a resolved config.
    pub fn new(config: InstallerConfig, ctx: InstallContext<'a>) -> Self {
        Self { config, ctx }
    }

    /// Get the resolved config.
    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(&self.config, &self.ctx, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Ocr(args)) => {
                let cmd = super::ocr::OcrCommand::new(&self.config, &self.ctx, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Backend(args)) => {
                let cmd = super::backend::BackendCommand::new(&self.config, &self.ctx, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.config, &self.ctx, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // No subcommand means install
                let cmd = super::install::InstallCommand::new(
                    &self.config,
                    &self.ctx,
                    InstallArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandOptions, CommandResult as ProcessResult, Invocation};
    use crate::ui::MockUI;
    use clap::Parser;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn no_subcommand_runs_install() {
        let calls = RefCell::new(0usize);
        let run = |_: &Invocation, _: &CommandOptions| {
            *calls.borrow_mut() += 1;
            Ok(ProcessResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        };
        let resolve = |_: &str| Some(PathBuf::from("/usr/bin/python"));
        let dispatcher = CommandDispatcher::new(
            InstallerConfig::default(),
            InstallContext {
                resolve_runtime: &resolve,
                run: &run,
            },
        );
        let cli = Cli::try_parse_from(["mekicopy"]).unwrap();
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(*calls.borrow(), 2);
        assert!(ui.has_success("설치가 완료되었습니다!"));
    }

    #[test]
    fn dispatcher_exposes_config() {
        let run = |_: &Invocation, _: &CommandOptions| -> Result<ProcessResult> {
            panic!("nothing should run")
        };
        let resolve = |_: &str| -> Option<PathBuf> { None };
        let dispatcher = CommandDispatcher::new(
            InstallerConfig::default().with_runtime(Some("python3")),
            InstallContext {
                resolve_runtime: &resolve,
                run: &run,
            },
        );
        assert_eq!(dispatcher.config().runtime, "python3");
    }
}
