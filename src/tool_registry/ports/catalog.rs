//! Tool catalog port for resolving a server's advertised tools.

use crate::tool_registry::domain::{McpServerDescriptor, McpToolDefinition};
use async_trait::async_trait;

/// Resolves the tools a registered server exposes.
///
/// The registry only consults the catalog for servers it holds, so
/// implementations never see unknown names. A server without a catalog entry
/// yields an empty list.
#[async_trait]
pub trait McpToolCatalog: Send + Sync {
    /// Lists tools exposed by `server`, in catalog order.
    async fn list_tools(&self, server: &McpServerDescriptor) -> Vec<McpToolDefinition>;
}
