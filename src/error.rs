//! Top-level error types for the staging tool.
//!
//! Pipeline failures are rendered tagged with the tool identifier so they
//! read the same wherever they surface.

use thiserror::Error;

/// Identifier prefixed to every staging failure.
pub const PLUGIN_NAME: &str = "kodegen_bundler_electron";

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all tool operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Staging pipeline errors
    #[error("[{}] {}", PLUGIN_NAME, .0)]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Configuration file could not be loaded
    #[error("Failed to load configuration {path}: {reason}")]
    InvalidConfig {
        /// Configuration file path
        path: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Returns the staging error, if this is one.
    pub fn as_bundler(&self) -> Option<&crate::bundler::Error> {
        match self {
            BundlerError::Bundler(e) => Some(e),
            _ => None,
        }
    }
}
