//! Configuration for estimate extraction.
//!
//! Settings live under the `weekly_planner` section of a YAML config
//! file shared with the rest of the planning tooling. Every setting has
//! a built-in default, so a missing section, a missing field, or no
//! config file at all never blocks extraction; a config file that
//! cannot be read or parsed is an error, whether it was named
//! explicitly or discovered in the working directory.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::estimation::DEFAULT_PATTERNS;

/// Config file consulted in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_estimate_hours() -> u32 {
    1
}

fn default_max_hours() -> u32 {
    8
}

/// Estimate extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Regular expressions tried in order; each captures hours in its
    /// first group.
    #[serde(default = "default_patterns")]
    pub estimate_patterns: Vec<String>,
    /// Hours assumed when no estimate is found.
    #[serde(default = "default_estimate_hours")]
    pub default_estimate_hours: u32,
    /// Upper bound for a single issue's estimate.
    #[serde(default = "default_max_hours")]
    pub max_estimate_hours: u32,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            estimate_patterns: default_patterns(),
            default_estimate_hours: default_estimate_hours(),
            max_estimate_hours: default_max_hours(),
        }
    }
}

/// Top-level view of the shared planner config file.
///
/// Sections belonging to other tools are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub weekly_planner: EstimateConfig,
}

impl PlannerConfig {
    /// Load configuration from a YAML file.
    ///
    /// A file whose document is empty or an explicit null (`~`) yields
    /// the defaults, not a parse error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed: Option<Self> =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(parsed.unwrap_or_default())
    }

    /// Resolve configuration for one invocation.
    ///
    /// An explicitly requested path must load. Without one,
    /// [`DEFAULT_CONFIG_FILE`] in the working directory is used when
    /// present, and built-in defaults otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    tracing::debug!("loading {} from working directory", DEFAULT_CONFIG_FILE);
                    Self::load(fallback)
                } else {
                    tracing::debug!("no config file found, using built-in defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}
