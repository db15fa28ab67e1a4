//! MekiCopy CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use mekicopy::cli::{Cli, CommandDispatcher};
use mekicopy::config::InstallerConfig;
use mekicopy::installer::default_context;
use mekicopy::shell::is_ci;
use mekicopy::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries OCR text and JSON.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mekicopy=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mekicopy=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("MekiCopy starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), output_mode);

    let config = InstallerConfig::default().with_runtime(cli.runtime.as_deref());
    if let Err(e) = config.validate() {
        ui.error(&format!("Error: {}", e));
        return exit_code(1);
    }

    let dispatcher = CommandDispatcher::new(config, default_context());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => exit_code(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            exit_code(e.exit_code())
        }
    }
}
