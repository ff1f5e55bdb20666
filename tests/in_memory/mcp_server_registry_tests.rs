//! In-memory integration tests for the MCP server registry.

use clicp::config::BuiltinServerEnvironment;
use clicp::tool_registry::{
    adapters::{BuiltinToolCatalog, memory::InMemoryMcpServerRegistry},
    domain::{McpServerName, McpServerSpec, McpServerStatus},
    services::{DefaultMcpServerRegistry, McpServerRegistryService, McpServerRegistryServiceError},
};
use rstest::{fixture, rstest};
use std::collections::BTreeSet;

#[fixture]
fn registry() -> DefaultMcpServerRegistry {
    McpServerRegistryService::with_builtin_servers(&BuiltinServerEnvironment::default())
}

fn spec(description: &str) -> McpServerSpec {
    McpServerSpec::new(description, "test-command", McpServerStatus::Active)
}

fn server_names(registry: &DefaultMcpServerRegistry) -> Vec<String> {
    registry
        .list_servers()
        .into_iter()
        .map(|server| server.name().as_str().to_owned())
        .collect()
}

#[rstest]
fn default_servers_are_registered(registry: DefaultMcpServerRegistry) {
    assert_eq!(
        server_names(&registry),
        ["filesystem", "git", "github", "postgres"]
    );

    let filesystem = registry
        .get_server("filesystem")
        .expect("filesystem should be registered");
    assert_eq!(filesystem.name().as_str(), "filesystem");
    assert_eq!(filesystem.status(), McpServerStatus::Active);
}

#[rstest]
fn listing_reflects_inserts_and_removals(mut registry: DefaultMcpServerRegistry) {
    registry.add_server("alpha", spec("first"));
    registry.add_server("beta", spec("second"));
    registry.add_server("alpha", spec("first again"));
    assert!(registry.remove_server("git"));
    assert!(registry.remove_server("beta"));

    let names = server_names(&registry);
    let unique: BTreeSet<&String> = names.iter().collect();

    assert_eq!(names.len(), unique.len());
    assert_eq!(names, ["filesystem", "github", "postgres", "alpha"]);
    assert_eq!(
        registry
            .get_server("alpha")
            .expect("alpha should be registered")
            .description(),
        "first again"
    );
}

#[rstest]
fn add_then_get_round_trips_supplied_fields(mut registry: DefaultMcpServerRegistry) {
    let supplied = McpServerSpec::new("Test server", "test-command", McpServerStatus::Inactive)
        .with_args(["--flag"])
        .with_env([("KEY", "value")]);

    registry.add_server("test", supplied.clone());

    let stored = registry.get_server("test").expect("test should be registered");
    assert_eq!(stored.name().as_str(), "test");
    assert_eq!(stored.description(), "Test server");
    assert_eq!(stored.command(), "test-command");
    assert_eq!(stored.spec(), &supplied);
}

#[rstest]
fn removing_an_absent_name_is_idempotent(mut registry: DefaultMcpServerRegistry) {
    assert!(!registry.remove_server("nonexistent"));
    assert!(!registry.remove_server("nonexistent"));
    assert_eq!(registry.list_servers().len(), 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filesystem_tools_match_catalog(registry: DefaultMcpServerRegistry) {
    let tools = registry
        .list_tools("filesystem")
        .await
        .expect("filesystem tools should resolve");

    let names: BTreeSet<&str> = tools.iter().map(|tool| tool.name()).collect();
    assert_eq!(
        names,
        BTreeSet::from(["read_file", "write_file", "list_directory"])
    );

    let read_file = tools
        .iter()
        .find(|tool| tool.name() == "read_file")
        .expect("read_file should exist");
    let schema = read_file
        .input_schema()
        .as_object()
        .expect("read_file schema should be an object");
    assert_eq!(schema.required_names(), ["path"]);
    assert!(tools.iter().all(|tool| tool.server() == "filesystem"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn git_tools_match_catalog(registry: DefaultMcpServerRegistry) {
    let tools = registry
        .list_tools("git")
        .await
        .expect("git tools should resolve");

    let names: Vec<&str> = tools.iter().map(|tool| tool.name()).collect();
    assert_eq!(names, ["git_status", "git_log", "git_diff"]);
}

#[rstest]
#[case("nonexistent")]
#[case("Filesystem")]
#[case("filesystem ")]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_names_fail_with_not_found(
    registry: DefaultMcpServerRegistry,
    #[case] name: &str,
) {
    let result = registry.list_tools(name).await;

    assert_eq!(
        result,
        Err(McpServerRegistryServiceError::NotFound(McpServerName::from(
            name
        )))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overwriting_a_builtin_keeps_its_catalog(mut registry: DefaultMcpServerRegistry) {
    registry.add_server("postgres", spec("replacement"));

    let tools = registry
        .list_tools("postgres")
        .await
        .expect("postgres should still resolve");

    assert_eq!(tools.len(), 1);
    assert_eq!(
        registry
            .get_server("postgres")
            .expect("postgres should be registered")
            .description(),
        "replacement"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_registry_resolves_nothing() {
    let registry =
        McpServerRegistryService::new(InMemoryMcpServerRegistry::new(), BuiltinToolCatalog::new());

    assert!(registry.list_servers().is_empty());
    assert!(matches!(
        registry.list_tools("filesystem").await,
        Err(McpServerRegistryServiceError::NotFound(_))
    ));
}
