//! In-memory adapters for the MCP server registry.

mod repository;

pub use repository::InMemoryMcpServerRegistry;
