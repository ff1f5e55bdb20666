//! Static tool catalog for the built-in MCP servers.

use super::builtins::{FILESYSTEM_SERVER, GIT_SERVER, GITHUB_SERVER, POSTGRES_SERVER};
use crate::tool_registry::{
    domain::{InputSchema, McpServerDescriptor, McpServerName, McpToolDefinition, ObjectSchema},
    ports::McpToolCatalog,
};
use async_trait::async_trait;

/// Tool catalog backed by a fixed table of built-in server tools.
///
/// The table is keyed by server name only. It is not derived from, nor kept
/// consistent with, a descriptor's command or arguments, so a server added at
/// runtime has no entry and reports no tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinToolCatalog;

impl BuiltinToolCatalog {
    /// Creates the built-in catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the table entry for `server_name`, or `None` when the table
    /// has no entry for it.
    #[must_use]
    pub fn tools_for(server_name: &McpServerName) -> Option<Vec<McpToolDefinition>> {
        let tools = match server_name.as_str() {
            FILESYSTEM_SERVER => filesystem_tools(server_name),
            GIT_SERVER => git_tools(server_name),
            GITHUB_SERVER => github_tools(server_name),
            POSTGRES_SERVER => postgres_tools(server_name),
            _ => return None,
        };
        Some(tools)
    }
}

#[async_trait]
impl McpToolCatalog for BuiltinToolCatalog {
    async fn list_tools(&self, server: &McpServerDescriptor) -> Vec<McpToolDefinition> {
        Self::tools_for(server.name()).unwrap_or_default()
    }
}

fn tool(
    server: &McpServerName,
    name: &str,
    description: &str,
    schema: ObjectSchema,
) -> McpToolDefinition {
    McpToolDefinition::new(server.clone(), name, description, schema)
}

fn filesystem_tools(server: &McpServerName) -> Vec<McpToolDefinition> {
    vec![
        tool(
            server,
            "read_file",
            "Read contents of a file",
            ObjectSchema::new().required("path", InputSchema::String, "File path to read"),
        ),
        tool(
            server,
            "write_file",
            "Write contents to a file",
            ObjectSchema::new()
                .required("path", InputSchema::String, "File path to write")
                .required("content", InputSchema::String, "Content to write"),
        ),
        tool(
            server,
            "list_directory",
            "List contents of a directory",
            ObjectSchema::new().required("path", InputSchema::String, "Directory path to list"),
        ),
    ]
}

fn git_tools(server: &McpServerName) -> Vec<McpToolDefinition> {
    let repo_path = || {
        ObjectSchema::new().required("repo_path", InputSchema::String, "Path to git repository")
    };
    vec![
        tool(
            server,
            "git_status",
            "Get git repository status",
            repo_path(),
        ),
        tool(
            server,
            "git_log",
            "Get git commit history",
            repo_path().optional(
                "limit",
                InputSchema::Number,
                "Number of commits to retrieve",
            ),
        ),
        tool(
            server,
            "git_diff",
            "Get git diff for changes",
            repo_path().optional("commit", InputSchema::String, "Commit hash to diff against"),
        ),
    ]
}

fn github_tools(server: &McpServerName) -> Vec<McpToolDefinition> {
    let string_list = || InputSchema::array_of(InputSchema::String);
    vec![
        tool(
            server,
            "create_or_update_file",
            "Create or update a single file in a repository",
            ObjectSchema::new()
                .required(
                    "owner",
                    InputSchema::String,
                    "Repository owner (username or organization)",
                )
                .required("repo", InputSchema::String, "Repository name")
                .required(
                    "path",
                    InputSchema::String,
                    "Path where to create/update the file",
                )
                .required("content", InputSchema::String, "Content of the file")
                .required("message", InputSchema::String, "Commit message")
                .required(
                    "branch",
                    InputSchema::String,
                    "Branch to create/update the file in",
                )
                .optional(
                    "sha",
                    InputSchema::String,
                    "SHA of file being replaced (for updates)",
                ),
        ),
        tool(
            server,
            "get_file_contents",
            "Get contents of a file or directory",
            ObjectSchema::new()
                .required("owner", InputSchema::String, "Repository owner")
                .required("repo", InputSchema::String, "Repository name")
                .required("path", InputSchema::String, "Path to file/directory")
                .optional("branch", InputSchema::String, "Branch to get contents from"),
        ),
        tool(
            server,
            "create_issue",
            "Create a new issue",
            ObjectSchema::new()
                .required("owner", InputSchema::String, "Repository owner")
                .required("repo", InputSchema::String, "Repository name")
                .required("title", InputSchema::String, "Issue title")
                .optional("body", InputSchema::String, "Issue description")
                .optional("assignees", string_list(), "Usernames to assign")
                .optional("labels", string_list(), "Labels to add"),
        ),
        tool(
            server,
            "create_pull_request",
            "Create a new pull request",
            ObjectSchema::new()
                .required("owner", InputSchema::String, "Repository owner")
                .required("repo", InputSchema::String, "Repository name")
                .required("title", InputSchema::String, "PR title")
                .optional("body", InputSchema::String, "PR description")
                .required("head", InputSchema::String, "Branch containing changes")
                .required("base", InputSchema::String, "Branch to merge into")
                .optional("draft", InputSchema::Boolean, "Create as draft PR"),
        ),
        tool(
            server,
            "search_repositories",
            "Search for GitHub repositories",
            ObjectSchema::new()
                .required("query", InputSchema::String, "Search query")
                .optional("page", InputSchema::Number, "Page number for pagination")
                .optional("perPage", InputSchema::Number, "Results per page (max 100)"),
        ),
    ]
}

fn postgres_tools(server: &McpServerName) -> Vec<McpToolDefinition> {
    vec![tool(
        server,
        "query",
        "Execute read-only SQL queries against the connected database",
        ObjectSchema::new().required("sql", InputSchema::String, "The SQL query to execute"),
    )]
}
