//! Domain model for MCP server descriptors and tool metadata.
//!
//! The registry domain models server identity, launch configuration, status,
//! and the tool catalog a server advertises. Nothing in this module launches
//! or talks to a server process.

mod ids;
mod schema;
mod server;
mod tool;

pub use ids::McpServerName;
pub use schema::{InputSchema, ObjectSchema, SchemaProperty};
pub use server::{McpServerDescriptor, McpServerSpec, McpServerStatus};
pub use tool::McpToolDefinition;
