//! MCP server descriptor and launch configuration.

use super::McpServerName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Status recorded for a registered MCP server.
///
/// The status is set when a descriptor is inserted and is never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McpServerStatus {
    /// Server is available for use.
    Active,
    /// Server is configured but disabled.
    Inactive,
    /// Server is known to be misconfigured or failing.
    Error,
}

impl McpServerStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for McpServerStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Launch configuration for a server, without its registry key.
///
/// This is the payload accepted when adding a server; the registry supplies
/// the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerSpec {
    description: String,
    command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    env: BTreeMap<String, String>,
    status: McpServerStatus,
}

impl McpServerSpec {
    /// Creates a spec with no arguments and no environment.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        command: impl Into<String>,
        status: McpServerStatus,
    ) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
            status,
        }
    }

    /// Replaces the launch arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = values.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the process environment variables.
    #[must_use]
    pub fn with_env<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = values
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the launch command.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the launch arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the environment variables.
    #[must_use]
    pub const fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Returns the recorded status.
    #[must_use]
    pub const fn status(&self) -> McpServerStatus {
        self.status
    }
}

/// A named server record held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerDescriptor {
    name: McpServerName,
    #[serde(flatten)]
    spec: McpServerSpec,
}

impl McpServerDescriptor {
    /// Binds a spec to its registry key.
    #[must_use]
    pub const fn new(name: McpServerName, spec: McpServerSpec) -> Self {
        Self { name, spec }
    }

    /// Returns the registry key.
    #[must_use]
    pub const fn name(&self) -> &McpServerName {
        &self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.spec.description()
    }

    /// Returns the launch command.
    #[must_use]
    pub fn command(&self) -> &str {
        self.spec.command()
    }

    /// Returns the launch arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        self.spec.args()
    }

    /// Returns the environment variables.
    #[must_use]
    pub const fn env(&self) -> &BTreeMap<String, String> {
        self.spec.env()
    }

    /// Returns the recorded status.
    #[must_use]
    pub const fn status(&self) -> McpServerStatus {
        self.spec.status()
    }

    /// Returns the launch configuration without the name.
    #[must_use]
    pub const fn spec(&self) -> &McpServerSpec {
        &self.spec
    }

    /// Returns the command followed by its arguments, space separated.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.command())
            .chain(self.args().iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
