//! Adapter implementations for the MCP server registry ports.

pub mod memory;

mod builtins;
mod catalog;

pub use builtins::{FILESYSTEM_SERVER, GIT_SERVER, GITHUB_SERVER, POSTGRES_SERVER, builtin_servers};
pub use catalog::BuiltinToolCatalog;
