//! Command-line entry point for inspecting registered MCP servers.
//!
//! Usage:
//!
//! ```text
//! clicp list
//! clicp <server-name> list
//! ```
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`; command output
//! goes to stdout and is uncoloured when stdout is not a terminal.

use clap::Parser;
use clicp::cli::{self, Cli};
use clicp::config::BuiltinServerEnvironment;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    let args = Cli::parse();

    let stdout = io::stdout();
    if !stdout.is_terminal() {
        colored::control::set_override(false);
    }
    let mut out = stdout.lock();

    let environment = BuiltinServerEnvironment::from_process_env();
    match cli::run(args, &environment, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            if let Err(write_error) = cli::report_error(&mut out, &failure) {
                error!(%failure, %write_error, "could not report failure");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
