//! Storage port for MCP server descriptors.

use crate::tool_registry::domain::McpServerDescriptor;

/// Storage contract for server descriptors keyed by name.
///
/// Every operation is total. Implementations must keep names unique and
/// report descriptors in insertion order.
pub trait McpServerRepository {
    /// Inserts `server`, replacing any descriptor stored under the same name.
    ///
    /// A replaced descriptor keeps its original position in the listing
    /// order.
    fn upsert(&mut self, server: McpServerDescriptor);

    /// Removes and returns the descriptor stored under `name`.
    fn remove(&mut self, name: &str) -> Option<McpServerDescriptor>;

    /// Finds a descriptor by exact name.
    fn find_by_name(&self, name: &str) -> Option<McpServerDescriptor>;

    /// Returns all descriptors in insertion order.
    fn list_all(&self) -> Vec<McpServerDescriptor>;
}
