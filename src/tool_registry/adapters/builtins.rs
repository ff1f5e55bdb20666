//! Descriptors for the MCP servers every registry starts with.

use crate::config::{BuiltinServerEnvironment, GITHUB_TOKEN_ENV};
use crate::tool_registry::domain::{
    McpServerDescriptor, McpServerName, McpServerSpec, McpServerStatus,
};

/// Name of the built-in filesystem server.
pub const FILESYSTEM_SERVER: &str = "filesystem";
/// Name of the built-in git server.
pub const GIT_SERVER: &str = "git";
/// Name of the built-in GitHub server.
pub const GITHUB_SERVER: &str = "github";
/// Name of the built-in `PostgreSQL` server.
pub const POSTGRES_SERVER: &str = "postgres";

/// Launcher shared by the built-in servers.
const NPX: &str = "npx";

/// Returns the built-in descriptors in registration order.
#[must_use]
pub fn builtin_servers(environment: &BuiltinServerEnvironment) -> Vec<McpServerDescriptor> {
    vec![
        builtin(
            FILESYSTEM_SERVER,
            McpServerSpec::new(
                "File system operations and management",
                NPX,
                McpServerStatus::Active,
            )
            .with_args(["@modelcontextprotocol/server-filesystem", "/tmp"]),
        ),
        builtin(
            GIT_SERVER,
            McpServerSpec::new("Git repository operations", NPX, McpServerStatus::Active)
                .with_args(["@modelcontextprotocol/server-git"]),
        ),
        builtin(
            GITHUB_SERVER,
            McpServerSpec::new(
                "GitHub API operations for repository management, file operations, and search",
                NPX,
                McpServerStatus::Active,
            )
            .with_args(["@modelcontextprotocol/server-github"])
            .with_env([(GITHUB_TOKEN_ENV, environment.github_token())]),
        ),
        builtin(
            POSTGRES_SERVER,
            McpServerSpec::new(
                "PostgreSQL database operations and schema inspection",
                NPX,
                McpServerStatus::Active,
            )
            .with_args([
                "@modelcontextprotocol/server-postgres",
                environment.postgres_connection_string(),
            ]),
        ),
    ]
}

fn builtin(name: &str, spec: McpServerSpec) -> McpServerDescriptor {
    McpServerDescriptor::new(McpServerName::from(name), spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_POSTGRES_CONNECTION_STRING;

    fn find<'a>(servers: &'a [McpServerDescriptor], name: &str) -> &'a McpServerDescriptor {
        servers
            .iter()
            .find(|server| server.name() == name)
            .expect("built-in server should exist")
    }

    #[test]
    fn four_servers_in_fixed_order() {
        let servers = builtin_servers(&BuiltinServerEnvironment::default());
        let names: Vec<&str> = servers.iter().map(|server| server.name().as_str()).collect();

        assert_eq!(names, [FILESYSTEM_SERVER, GIT_SERVER, GITHUB_SERVER, POSTGRES_SERVER]);
        assert!(
            servers
                .iter()
                .all(|server| server.status() == McpServerStatus::Active)
        );
    }

    #[test]
    fn missing_token_degrades_to_empty_string() {
        let servers = builtin_servers(&BuiltinServerEnvironment::default());
        let github = find(&servers, GITHUB_SERVER);

        assert_eq!(
            github.env().get(GITHUB_TOKEN_ENV).map(String::as_str),
            Some("")
        );
        assert_eq!(
            find(&servers, POSTGRES_SERVER).args().last().map(String::as_str),
            Some(DEFAULT_POSTGRES_CONNECTION_STRING)
        );
    }

    #[test]
    fn environment_values_populate_descriptors() {
        let environment = BuiltinServerEnvironment::default()
            .with_github_token("ghp_test")
            .with_postgres_connection_string("postgresql://db/app");
        let servers = builtin_servers(&environment);

        assert_eq!(
            find(&servers, GITHUB_SERVER)
                .env()
                .get(GITHUB_TOKEN_ENV)
                .map(String::as_str),
            Some("ghp_test")
        );
        assert_eq!(
            find(&servers, POSTGRES_SERVER).command_line(),
            "npx @modelcontextprotocol/server-postgres postgresql://db/app"
        );
    }

    #[test]
    fn filesystem_server_is_rooted_at_tmp() {
        let servers = builtin_servers(&BuiltinServerEnvironment::default());

        assert_eq!(
            find(&servers, FILESYSTEM_SERVER).command_line(),
            "npx @modelcontextprotocol/server-filesystem /tmp"
        );
    }
}
