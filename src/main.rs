//! Perchance: text-to-image prompt generator.
//!
//! This is the main entry point for the `perchance` CLI. It parses arguments,
//! resolves the run context, sets up logging, dispatches to the appropriate
//! command handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod enhance;
pub mod error;
pub mod exit_codes;
pub mod export;
pub mod fs;
pub mod history;
pub mod prompt;
pub mod store;
pub mod style;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::LogLevel;
use context::AppContext;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = AppContext::resolve(cli.config.as_deref()).and_then(|ctx| {
        init_logging(ctx.config.log_level, cli.verbose);
        commands::dispatch(&ctx, cli.command)
    });

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`, which wins over the config.
fn init_logging(level: LogLevel, verbose: bool) {
    let fallback = if verbose {
        LogLevel::Debug
    } else {
        level
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.as_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
