//! MCP server registry and tool catalog lookup.
//!
//! The registry maps server names to launch descriptors and resolves a
//! registered server to the tools it advertises. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry operations in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
