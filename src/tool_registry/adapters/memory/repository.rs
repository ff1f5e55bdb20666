//! In-memory repository for MCP server descriptors.

use crate::tool_registry::{
    domain::{McpServerDescriptor, McpServerName},
    ports::McpServerRepository,
};
use std::collections::HashMap;

/// Process-local server store that preserves insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMcpServerRegistry {
    servers: HashMap<McpServerName, McpServerDescriptor>,
    insertion_order: Vec<McpServerName>,
}

impl InMemoryMcpServerRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored descriptors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.insertion_order.len()
    }

    /// Returns whether the registry holds no descriptors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }
}

impl FromIterator<McpServerDescriptor> for InMemoryMcpServerRegistry {
    fn from_iter<I: IntoIterator<Item = McpServerDescriptor>>(servers: I) -> Self {
        let mut registry = Self::new();
        for server in servers {
            registry.upsert(server);
        }
        registry
    }
}

impl McpServerRepository for InMemoryMcpServerRegistry {
    fn upsert(&mut self, server: McpServerDescriptor) {
        let name = server.name().clone();
        if self.servers.insert(name.clone(), server).is_none() {
            self.insertion_order.push(name);
        }
    }

    fn remove(&mut self, name: &str) -> Option<McpServerDescriptor> {
        let removed = self.servers.remove(name)?;
        self.insertion_order.retain(|stored| stored.as_str() != name);
        Some(removed)
    }

    fn find_by_name(&self, name: &str) -> Option<McpServerDescriptor> {
        self.servers.get(name).cloned()
    }

    fn list_all(&self) -> Vec<McpServerDescriptor> {
        self.insertion_order
            .iter()
            .filter_map(|name| self.servers.get(name))
            .cloned()
            .collect()
    }
}
