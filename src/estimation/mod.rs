//! Time estimate extraction from issue text.
//!
//! Estimates are discovered with an ordered list of compiled regular
//! expressions; the first pattern that matches anywhere in the text wins.
//! Captured values are normalized to integer hours inside the configured
//! bounds, and anything unusable falls back to the default estimate.

mod patterns;

pub use patterns::{DEFAULT_PATTERNS, compile_patterns};

use regex::Regex;

use crate::config::EstimateConfig;
use crate::error::ConfigError;

/// Issue field consulted for estimate text.
pub const BODY_FIELD: &str = "body";

/// Field added to each enriched issue record.
pub const ESTIMATED_HOURS_FIELD: &str = "estimated_hours";

/// Parses time estimates out of issue bodies.
///
/// Built once from an [`EstimateConfig`], then stateless: `extract` and
/// `batch_extract` take `&self` and are safe to call concurrently.
///
/// # Example
///
/// ```
/// use hourhand::Estimator;
///
/// let estimator = Estimator::default();
/// assert_eq!(estimator.extract(Some("Estimate: 3 hours")), 3);
/// assert_eq!(estimator.extract(Some("[2h] Build feature")), 2);
/// assert_eq!(estimator.extract(None), 1);
/// ```
pub struct Estimator {
    /// Compiled patterns in precedence order.
    patterns: Vec<Regex>,
    /// Hours assumed when no pattern yields a usable value.
    default_hours: u32,
    /// Ceiling for a single issue's estimate.
    max_hours: u32,
}

impl Estimator {
    /// Build an estimator from configuration.
    ///
    /// Pattern strings that fail to compile are skipped with a warning.
    /// The single rejected configuration is a default above the maximum,
    /// which returns [`ConfigError::InvalidBounds`].
    pub fn new(config: &EstimateConfig) -> Result<Self, ConfigError> {
        let patterns = compile_patterns(&config.estimate_patterns);

        if config.default_estimate_hours > config.max_estimate_hours {
            return Err(ConfigError::InvalidBounds {
                default_hours: config.default_estimate_hours,
                max_hours: config.max_estimate_hours,
            });
        }

        tracing::debug!(
            "estimator ready with {} patterns, bounds {}..={} hours",
            patterns.len(),
            config.default_estimate_hours,
            config.max_estimate_hours
        );

        Ok(Self {
            patterns,
            default_hours: config.default_estimate_hours,
            max_hours: config.max_estimate_hours,
        })
    }

    /// Compiled patterns in precedence order.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Hours returned when no estimate is found.
    pub fn default_hours(&self) -> u32 {
        self.default_hours
    }

    /// Largest allowed estimate for a single issue.
    pub fn max_hours(&self) -> u32 {
        self.max_hours
    }

    /// Extract a time estimate from a single issue body.
    ///
    /// Returns hours in `[default_hours, max_hours]`. The default is
    /// returned when the body is missing or blank, when no pattern
    /// matches, or when the first matching pattern captures zero (zero
    /// means "no meaningful estimate", not zero effort). Matched values
    /// are clamped into the bounds.
    pub fn extract(&self, body: Option<&str>) -> u32 {
        let Some(body) = body else {
            return self.default_hours;
        };

        let body = body.trim();
        if body.is_empty() {
            return self.default_hours;
        }

        for pattern in &self.patterns {
            let Some(captures) = pattern.captures(body) else {
                continue;
            };

            // A capture that is missing or does not parse as an integer
            // falls through to the next pattern in order.
            let Some(raw) = captures.get(1) else {
                continue;
            };
            let Ok(value) = raw.as_str().parse::<i64>() else {
                continue;
            };

            let hours = value.unsigned_abs();
            if hours == 0 {
                return self.default_hours;
            }

            return hours.clamp(u64::from(self.default_hours), u64::from(self.max_hours)) as u32;
        }

        self.default_hours
    }

    /// Extract estimates for a collection of issue records.
    ///
    /// Returns a new vector with the input's length and order. Each JSON
    /// object is copied with [`ESTIMATED_HOURS_FIELD`] set from its
    /// [`BODY_FIELD`]; a missing, null, or non-string body counts as
    /// absent text. Entries that are not objects pass through unchanged.
    /// The operation never fails; bad records degrade to the default.
    pub fn batch_extract(&self, issues: &[serde_json::Value]) -> Vec<serde_json::Value> {
        issues
            .iter()
            .map(|issue| match issue.as_object() {
                Some(fields) => {
                    let body = fields.get(BODY_FIELD).and_then(|v| v.as_str());
                    let estimated = self.extract(body);

                    let mut enriched = fields.clone();
                    enriched.insert(
                        ESTIMATED_HOURS_FIELD.to_string(),
                        serde_json::Value::from(estimated),
                    );
                    serde_json::Value::Object(enriched)
                }
                None => {
                    tracing::debug!("passing through non-object issue entry");
                    issue.clone()
                }
            })
            .collect()
    }
}

impl Default for Estimator {
    /// Estimator over the built-in pattern set with default bounds.
    fn default() -> Self {
        Self::new(&EstimateConfig::default()).expect("built-in configuration is valid")
    }
}
