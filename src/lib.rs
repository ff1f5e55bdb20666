//! clicp: Command Line Interface Context Protocol.
//!
//! This crate lists statically registered MCP server descriptors and the tool
//! metadata each one advertises. Servers are never launched; the registry is
//! an in-memory value built for each invocation.
//!
//! # Architecture
//!
//! The registry follows hexagonal architecture principles:
//!
//! - **Domain**: descriptors, tool definitions and parameter schemas
//! - **Ports**: storage and tool catalog contracts
//! - **Adapters**: the in-memory store and the built-in server and tool tables
//!
//! # Modules
//!
//! - [`tool_registry`]: server registry and tool catalog lookup
//! - [`config`]: environment-derived settings for the built-in servers
//! - [`cli`]: argument parsing, dispatch and console rendering

pub mod cli;
pub mod config;
pub mod tool_registry;
