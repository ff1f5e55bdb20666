//! Command dispatch against an explicitly passed registry.

use super::{Cli, CliError, CliResult, Command, LIST_ACTION, render};
use crate::tool_registry::{
    ports::{McpServerRepository, McpToolCatalog},
    services::{McpServerRegistryService, McpServerRegistryServiceError},
};
use clap::CommandFactory;
use std::io::Write;
use tracing::debug;

/// Executes a parsed command, writing all user-facing output to `out`.
///
/// Unknown servers named with the `list` action are reported on `out` and
/// still succeed; only unrecognised command shapes fail.
///
/// # Errors
///
/// Returns [`CliError::UnknownCommand`] when the command line names no known
/// command and [`CliError::Io`] when output cannot be written.
pub async fn execute<R, C, W>(
    command: Option<Command>,
    registry: &McpServerRegistryService<R, C>,
    out: &mut W,
) -> CliResult<()>
where
    R: McpServerRepository,
    C: McpToolCatalog,
    W: Write,
{
    match command {
        None => write!(out, "{}", Cli::command().render_help()).map_err(CliError::from),
        Some(Command::List) => Ok(render::server_list(out, &registry.list_servers())?),
        Some(Command::Server(words)) => run_server_command(registry, &words, out).await,
    }
}

async fn run_server_command<R, C, W>(
    registry: &McpServerRegistryService<R, C>,
    words: &[String],
    out: &mut W,
) -> CliResult<()>
where
    R: McpServerRepository,
    C: McpToolCatalog,
    W: Write,
{
    match words {
        [server_name, action] if action == LIST_ACTION => {
            list_tools(registry, server_name, out).await
        }
        [server_name] => match registry.get_server(server_name) {
            Some(server) => Ok(render::server_usage(out, &server)?),
            None => Err(CliError::UnknownCommand(server_name.clone())),
        },
        _ => Err(CliError::UnknownCommand(words.join(" "))),
    }
}

async fn list_tools<R, C, W>(
    registry: &McpServerRegistryService<R, C>,
    server_name: &str,
    out: &mut W,
) -> CliResult<()>
where
    R: McpServerRepository,
    C: McpToolCatalog,
    W: Write,
{
    match registry.list_tools(server_name).await {
        Ok(tools) => render::tool_list(out, server_name, &tools)?,
        Err(McpServerRegistryServiceError::NotFound(name)) => {
            debug!(server = %name, "tool listing requested for unknown server");
            render::server_not_found(out, name.as_str())?;
        }
    }
    Ok(())
}
