//! Environment-derived settings for the built-in MCP servers.
//!
//! The registry never reads the process environment itself; callers build a
//! [`BuiltinServerEnvironment`] once and hand it to the registry constructor.

use std::env;

/// Environment variable holding the GitHub personal access token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

/// Environment variable holding the `PostgreSQL` connection string.
pub const POSTGRES_CONNECTION_ENV: &str = "POSTGRES_CONNECTION_STRING";

/// Connection string used when [`POSTGRES_CONNECTION_ENV`] is unset or empty.
pub const DEFAULT_POSTGRES_CONNECTION_STRING: &str = "postgresql://localhost/postgres";

/// Values injected into the built-in server descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinServerEnvironment {
    github_token: String,
    postgres_connection_string: String,
}

impl Default for BuiltinServerEnvironment {
    fn default() -> Self {
        Self {
            github_token: String::new(),
            postgres_connection_string: DEFAULT_POSTGRES_CONNECTION_STRING.to_owned(),
        }
    }
}

impl BuiltinServerEnvironment {
    /// Reads both values from the process environment.
    ///
    /// Missing, empty or non-Unicode values fall back to the defaults: an
    /// empty token and [`DEFAULT_POSTGRES_CONNECTION_STRING`].
    #[must_use]
    pub fn from_process_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable lookup.
    ///
    /// A variable that is present but empty counts as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = Self::default();
        Self {
            github_token: non_empty(GITHUB_TOKEN_ENV).unwrap_or(defaults.github_token),
            postgres_connection_string: non_empty(POSTGRES_CONNECTION_ENV)
                .unwrap_or(defaults.postgres_connection_string),
        }
    }

    /// Overrides the GitHub token.
    #[must_use]
    pub fn with_github_token(mut self, token: impl Into<String>) -> Self {
        self.github_token = token.into();
        self
    }

    /// Overrides the `PostgreSQL` connection string.
    #[must_use]
    pub fn with_postgres_connection_string(mut self, value: impl Into<String>) -> Self {
        self.postgres_connection_string = value.into();
        self
    }

    /// Returns the GitHub token, empty when unset.
    #[must_use]
    pub fn github_token(&self) -> &str {
        &self.github_token
    }

    /// Returns the `PostgreSQL` connection string.
    #[must_use]
    pub fn postgres_connection_string(&self) -> &str {
        &self.postgres_connection_string
    }
}
