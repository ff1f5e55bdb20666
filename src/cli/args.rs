//! CLI argument parsing using clap derive.

use clap::{Parser, Subcommand};

/// Command Line Interface Context Protocol - Interact with MCP servers
#[derive(Parser, Debug)]
#[command(name = "clicp", version, long_about = None)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all available MCP servers
    List,

    /// Interact with a specific MCP server: `clicp <server-name> list`
    #[command(external_subcommand)]
    Server(Vec<String>),
}
