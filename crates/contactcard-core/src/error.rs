//! Error types for Contact Card configuration

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a site configuration snapshot.
///
/// Rendering never fails; only reading the settings from disk can.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for a site config
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
