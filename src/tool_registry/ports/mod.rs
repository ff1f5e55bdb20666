//! Port contracts for the MCP server registry.

mod catalog;
mod repository;

pub use catalog::McpToolCatalog;
pub use repository::McpServerRepository;
