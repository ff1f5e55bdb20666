//! MCP tool definition value object.

use super::{InputSchema, McpServerName};
use serde::Serialize;

/// Metadata for a tool advertised by an MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct McpToolDefinition {
    name: String,
    description: String,
    input_schema: InputSchema,
    server: McpServerName,
}

impl McpToolDefinition {
    /// Creates a tool definition owned by `server`.
    #[must_use]
    pub fn new(
        server: McpServerName,
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: impl Into<InputSchema>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: input_schema.into(),
            server,
        }
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tool description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the input schema.
    #[must_use]
    pub const fn input_schema(&self) -> &InputSchema {
        &self.input_schema
    }

    /// Returns the name of the server that owns this tool.
    #[must_use]
    pub const fn server(&self) -> &McpServerName {
        &self.server
    }
}
