//! Command-line surface for `clicp`.
//!
//! Parsing lives in [`args`], dispatch in [`commands`], and console output in
//! [`render`]. Everything writes to a caller-supplied sink so the binary and
//! the tests share one code path.

pub mod args;
pub mod commands;
mod error;
pub mod render;

pub use args::{Cli, Command};
pub use commands::execute;
pub use error::{CliError, CliResult};

use crate::config::BuiltinServerEnvironment;
use crate::tool_registry::services::DefaultMcpServerRegistry;
use std::io::Write;

/// Name the binary is invoked as.
pub const PROGRAM_NAME: &str = "clicp";

/// Per-server action that lists the server's tools.
pub const LIST_ACTION: &str = "list";

/// Runs one invocation against a freshly built registry.
///
/// # Errors
///
/// Returns [`CliError::UnknownCommand`] for unrecognised commands and
/// [`CliError::Io`] when the runtime cannot start or output cannot be
/// written.
pub fn run<W: Write>(
    cli: Cli,
    environment: &BuiltinServerEnvironment,
    out: &mut W,
) -> CliResult<()> {
    let registry = DefaultMcpServerRegistry::with_builtin_servers(environment);
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(execute(cli.command, &registry, out))
}

/// Writes the user-facing report for a failed invocation.
///
/// # Errors
///
/// Returns the underlying I/O error when the report cannot be written.
pub fn report_error<W: Write>(out: &mut W, error: &CliError) -> std::io::Result<()> {
    match error {
        CliError::UnknownCommand(command) => render::unknown_command(out, command),
        CliError::Io(_) => render::failure(out, error),
    }
}
