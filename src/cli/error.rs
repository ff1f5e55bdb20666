//! Error types for the command-line layer.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that end a CLI invocation with a failure status.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line did not name a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Writing output or starting the runtime failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
