//! In-memory registry integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `mcp_server_registry_tests`: server CRUD and tool catalog lookup

mod in_memory {
    mod mcp_server_registry_tests;
}
