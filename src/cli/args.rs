//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Running `mekicopy` without a
//! subcommand is the same as `mekicopy install`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Backend;

/// MekiCopy - installs the MekiCopy OCR toolchain into a Python runtime.
#[derive(Debug, Parser)]
#[command(name = "mekicopy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Python runtime name or path (default: python)
    #[arg(long, global = true, env = "MEKICOPY_RUNTIME", value_name = "NAME|PATH")]
    pub runtime: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output; package manager output is hidden unless a step fails
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upgrade pip and install the OCR packages (default if no command specified)
    Install(InstallArgs),

    /// Recognize the text in an image with the installed OCR tool
    Ocr(OcrArgs),

    /// Switch the inference backend between CPU and GPU
    Backend(BackendArgs),

    /// Check whether the Python runtime can be found
    Check(CheckArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Preview commands without executing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `ocr` command.
#[derive(Debug, Clone, clap::Args)]
pub struct OcrArgs {
    /// Image file to recognize
    pub image: PathBuf,

    /// Print the tool's output without joining lines
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `backend` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BackendArgs {
    /// Backend to switch to
    #[arg(value_enum)]
    pub target: Backend,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Preview commands without executing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
