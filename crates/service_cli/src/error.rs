//! CLI error type.

use thiserror::Error;

use crate::config::ConfigError;
use detra_core::SeedError;

/// Errors surfaced by `detra` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid or unreadable configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Seed not accepted by the selected source.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// Failure writing output.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more self-checks failed.
    #[error("{0} self-check(s) failed")]
    ChecksFailed(usize),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
