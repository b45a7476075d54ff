//! Error types for configuration loading and validation.

use std::path::PathBuf;

/// Errors that can occur while loading or validating estimator configuration.
///
/// Extraction itself never fails: malformed text and records degrade to the
/// default estimate.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configured default estimate exceeds the configured maximum.
    #[error("default_estimate_hours ({default_hours}) exceeds max_estimate_hours ({max_hours})")]
    InvalidBounds { default_hours: u32, max_hours: u32 },

    /// Configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid YAML.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
