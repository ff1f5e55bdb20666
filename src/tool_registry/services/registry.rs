//! Service layer for MCP server registry operations.

use crate::config::BuiltinServerEnvironment;
use crate::tool_registry::{
    adapters::{BuiltinToolCatalog, builtin_servers, memory::InMemoryMcpServerRegistry},
    domain::{McpServerDescriptor, McpServerName, McpServerSpec, McpToolDefinition},
    ports::{McpServerRepository, McpToolCatalog},
};
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum McpServerRegistryServiceError {
    /// No server is registered under the given name.
    #[error("Server '{0}' not found")]
    NotFound(McpServerName),
}

/// Result type for registry service operations.
pub type McpServerRegistryServiceResult<T> = Result<T, McpServerRegistryServiceError>;

/// Registry over the built-in in-memory store and static tool table.
pub type DefaultMcpServerRegistry =
    McpServerRegistryService<InMemoryMcpServerRegistry, BuiltinToolCatalog>;

/// MCP server registry: descriptor storage plus tool catalog resolution.
///
/// The service is an owned value. Callers construct one per invocation and
/// pass it to whatever needs it; there is no shared instance.
#[derive(Debug, Clone)]
pub struct McpServerRegistryService<R, C>
where
    R: McpServerRepository,
    C: McpToolCatalog,
{
    repository: R,
    catalog: C,
}

impl<R, C> McpServerRegistryService<R, C>
where
    R: McpServerRepository,
    C: McpToolCatalog,
{
    /// Creates a registry over the given store and catalog.
    #[must_use]
    pub const fn new(repository: R, catalog: C) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Returns every registered descriptor in insertion order.
    #[must_use]
    pub fn list_servers(&self) -> Vec<McpServerDescriptor> {
        self.repository.list_all()
    }

    /// Finds a descriptor by exact, case-sensitive name.
    #[must_use]
    pub fn get_server(&self, name: &str) -> Option<McpServerDescriptor> {
        self.repository.find_by_name(name)
    }

    /// Returns the tools exposed by the named server.
    ///
    /// A registered server without a catalog entry yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerRegistryServiceError::NotFound`] when no server is
    /// registered under `server_name`.
    pub async fn list_tools(
        &self,
        server_name: &str,
    ) -> McpServerRegistryServiceResult<Vec<McpToolDefinition>> {
        let Some(server) = self.repository.find_by_name(server_name) else {
            warn!(server = server_name, "tool lookup for unregistered server");
            return Err(McpServerRegistryServiceError::NotFound(
                McpServerName::from(server_name),
            ));
        };

        let tools = self.catalog.list_tools(&server).await;
        debug!(server = server_name, tool_count = tools.len(), "resolved tool catalog");
        Ok(tools)
    }

    /// Inserts a server, replacing any descriptor already stored under `name`.
    ///
    /// The tool catalog is left untouched.
    pub fn add_server(&mut self, name: impl Into<McpServerName>, spec: McpServerSpec) {
        let descriptor = McpServerDescriptor::new(name.into(), spec);
        debug!(server = %descriptor.name(), "registering server");
        self.repository.upsert(descriptor);
    }

    /// Removes the named server, returning whether one was removed.
    pub fn remove_server(&mut self, name: &str) -> bool {
        let removed = self.repository.remove(name).is_some();
        debug!(server = name, removed, "removing server");
        removed
    }
}

impl DefaultMcpServerRegistry {
    /// Creates a registry pre-populated with the built-in servers.
    #[must_use]
    pub fn with_builtin_servers(environment: &BuiltinServerEnvironment) -> Self {
        Self::new(
            builtin_servers(environment).into_iter().collect(),
            BuiltinToolCatalog::new(),
        )
    }
}
