//! Estimate extraction for weekly planning.
//!
//! `hourhand` pulls integer hour estimates out of free-form issue text
//! using an ordered, configurable list of regular expressions, then
//! enriches JSON issue records with the result. Extraction never fails:
//! missing text, unmatched patterns, and out-of-range values all degrade
//! to configured defaults.
//!
//! ```
//! use hourhand::Estimator;
//!
//! let estimator = Estimator::default();
//! assert_eq!(estimator.extract(Some("Estimate: 3 hours")), 3);
//! assert_eq!(estimator.extract(Some("nothing to see here")), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod estimation;
pub mod report;

pub use config::{EstimateConfig, PlannerConfig};
pub use error::ConfigError;
pub use estimation::Estimator;
