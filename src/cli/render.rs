//! Console rendering for registry listings and diagnostics.

use super::{LIST_ACTION, PROGRAM_NAME};
use crate::tool_registry::domain::{McpServerDescriptor, McpServerStatus, McpToolDefinition};
use colored::{ColoredString, Colorize};
use std::fmt::Display;
use std::io::{self, Write};

/// Writes the server overview printed by `clicp list`.
///
/// # Errors
///
/// Returns any error raised by the output sink.
pub fn server_list<W: Write>(out: &mut W, servers: &[McpServerDescriptor]) -> io::Result<()> {
    if servers.is_empty() {
        return writeln!(out, "{}", "No MCP servers configured.".yellow());
    }

    writeln!(out, "{}", "Available MCP Servers:".bold().blue())?;
    writeln!(out)?;

    for server in servers {
        writeln!(
            out,
            "{} {}",
            server.name().as_str().bold(),
            status_label(server.status())
        )?;
        writeln!(out, "  {}", server.description().bright_black())?;
        writeln!(out, "  {} {}", "Command:".dimmed(), server.command_line())?;
        writeln!(out)?;
    }

    Ok(())
}

/// Writes the tool catalog printed by `clicp <server-name> list`.
///
/// # Errors
///
/// Returns any error raised by the output sink.
pub fn tool_list<W: Write>(
    out: &mut W,
    server_name: &str,
    tools: &[McpToolDefinition],
) -> io::Result<()> {
    if tools.is_empty() {
        return writeln!(
            out,
            "{}",
            format!("No tools available for server '{server_name}'").yellow()
        );
    }

    writeln!(
        out,
        "{}",
        format!("Tools for {server_name} server:").bold().blue()
    )?;
    writeln!(out)?;

    for tool in tools {
        writeln!(out, "{}", tool.name().bold().green())?;
        writeln!(out, "  {}", tool.description().bright_black())?;

        if let Some(schema) = tool.input_schema().as_object()
            && !schema.properties().is_empty()
        {
            writeln!(out, "  {}", "Parameters:".dimmed())?;
            for property in schema.properties() {
                let marker = if schema.is_required(property.name()) {
                    "*".red()
                } else {
                    "".normal()
                };
                writeln!(
                    out,
                    "    {}{}: {}",
                    property.name(),
                    marker,
                    property.summary().dimmed()
                )?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", "* Required parameters".dimmed())
}

/// Writes the diagnostic for a server name that is not registered.
///
/// # Errors
///
/// Returns any error raised by the output sink.
pub fn server_not_found<W: Write>(out: &mut W, server_name: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Error: Server '{server_name}' not found").red()
    )?;
    writeln!(
        out,
        "{}",
        format!("Use \"{PROGRAM_NAME} {LIST_ACTION}\" to see available servers").bright_black()
    )
}

/// Writes the usage hint for a known server given without an action.
///
/// # Errors
///
/// Returns any error raised by the output sink.
pub fn server_usage<W: Write>(out: &mut W, server: &McpServerDescriptor) -> io::Result<()> {
    let name = server.name().as_str();
    writeln!(out, "Interact with {name} MCP server")?;
    writeln!(out)?;
    writeln!(
        out,
        "{} {PROGRAM_NAME} {name} <COMMAND>",
        "Usage:".bold()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", "Commands:".bold())?;
    writeln!(
        out,
        "  {LIST_ACTION}  List all tools available for {name} server"
    )
}

/// Writes the diagnostic for an unrecognised command.
///
/// # Errors
///
/// Returns any error raised by the output sink.
pub fn unknown_command<W: Write>(out: &mut W, command: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("Unknown command: {command}").red())?;
    writeln!(
        out,
        "{}",
        format!("Use \"{PROGRAM_NAME} --help\" to see available commands").bright_black()
    )
}

/// Writes a generic failure line.
///
/// # Errors
///
/// Returns any error raised by the output sink.
pub fn failure<W: Write>(out: &mut W, error: &impl Display) -> io::Result<()> {
    writeln!(out, "{}: {error}", "error".red().bold())
}

fn status_label(status: McpServerStatus) -> ColoredString {
    let label = format!("[{status}]");
    match status {
        McpServerStatus::Active => label.green(),
        McpServerStatus::Inactive => label.yellow(),
        McpServerStatus::Error => label.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool_registry::adapters::BuiltinToolCatalog;
    use crate::tool_registry::domain::{McpServerName, McpServerSpec};
    use rstest::rstest;

    fn rendered(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        write(&mut buffer).expect("rendering into a buffer should succeed");
        String::from_utf8(buffer).expect("output should be UTF-8")
    }

    fn server(name: &str, status: McpServerStatus) -> McpServerDescriptor {
        McpServerDescriptor::new(
            McpServerName::from(name),
            McpServerSpec::new("Git repository operations", "npx", status)
                .with_args(["@modelcontextprotocol/server-git"]),
        )
    }

    #[test]
    fn server_list_shows_name_status_and_command() {
        let output = rendered(|out| server_list(out, &[server("git", McpServerStatus::Active)]));

        assert_eq!(
            output,
            "Available MCP Servers:\n\n\
             git [active]\n  \
             Git repository operations\n  \
             Command: npx @modelcontextprotocol/server-git\n\n"
        );
    }

    #[rstest]
    #[case(McpServerStatus::Inactive, "[inactive]")]
    #[case(McpServerStatus::Error, "[error]")]
    fn server_list_labels_each_status(
        #[case] status: McpServerStatus,
        #[case] label: &str,
    ) {
        let output = rendered(|out| server_list(out, &[server("git", status)]));

        assert!(output.contains(&format!("git {label}")));
    }

    #[test]
    fn empty_server_list_reports_no_servers() {
        let output = rendered(|out| server_list(out, &[]));

        assert_eq!(output, "No MCP servers configured.\n");
    }

    #[test]
    fn tool_list_marks_required_parameters() {
        let tools = BuiltinToolCatalog::tools_for(&McpServerName::from("git"))
            .expect("git should have a table entry");

        let output = rendered(|out| tool_list(out, "git", &tools));

        assert!(output.starts_with("Tools for git server:\n\n"));
        assert!(output.contains("git_log\n  Get git commit history\n  Parameters:\n"));
        assert!(output.contains("    repo_path*: Path to git repository\n"));
        assert!(output.contains("    limit: Number of commits to retrieve\n"));
        assert!(output.ends_with("* Required parameters\n"));
    }

    #[test]
    fn empty_tool_list_reports_no_tools() {
        let output = rendered(|out| tool_list(out, "test", &[]));

        assert_eq!(output, "No tools available for server 'test'\n");
    }

    #[test]
    fn not_found_includes_hint() {
        let output = rendered(|out| server_not_found(out, "nonexistent"));

        assert_eq!(
            output,
            "Error: Server 'nonexistent' not found\n\
             Use \"clicp list\" to see available servers\n"
        );
    }

    #[test]
    fn unknown_command_includes_hint() {
        let output = rendered(|out| unknown_command(out, "bogus"));

        assert_eq!(
            output,
            "Unknown command: bogus\nUse \"clicp --help\" to see available commands\n"
        );
    }

    #[test]
    fn server_usage_names_the_list_action() {
        let output = rendered(|out| server_usage(out, &server("git", McpServerStatus::Active)));

        assert!(output.contains("Usage: clicp git <COMMAND>"));
        assert!(output.contains("list  List all tools available for git server"));
    }
}
