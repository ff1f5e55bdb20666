//! Application services for MCP server registry operations.

mod registry;

pub use registry::{
    DefaultMcpServerRegistry, McpServerRegistryService, McpServerRegistryServiceError,
    McpServerRegistryServiceResult,
};
