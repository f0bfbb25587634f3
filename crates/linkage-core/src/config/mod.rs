//! Engine configuration.
//!
//! Defaults are hardcoded; every value can be overridden via TOML.
//! Built once at startup and passed into the engine explicitly — there is
//! no process-wide mutable registry.

mod weight_profile;

pub use weight_profile::{ProfileRegistry, WeightProfile};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEARCH_THRESHOLD, MIN_SERIES_SIZE, SERIES_SEARCH_THRESHOLD};
use crate::errors::{LinkageError, LinkageResult};

/// Detection thresholds and profile selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum score for a pairwise similarity search hit.
    pub search_threshold: f64,
    /// Minimum score between a seed and a member during series detection.
    pub series_threshold: f64,
    /// Minimum number of scenes that form a series.
    pub min_series_size: usize,
    /// Name of the weight profile to score with.
    pub profile: String,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            search_threshold: DEFAULT_SEARCH_THRESHOLD,
            series_threshold: SERIES_SEARCH_THRESHOLD,
            min_series_size: MIN_SERIES_SIZE,
            profile: "standard".to_string(),
        }
    }
}

impl DetectionConfig {
    /// Parse a config from TOML, falling back to defaults for absent keys.
    pub fn from_toml_str(raw: &str) -> LinkageResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LinkageResult<()> {
        for threshold in [self.search_threshold, self.series_threshold] {
            if !(0.0..=100.0).contains(&threshold) {
                return Err(LinkageError::ThresholdOutOfRange { value: threshold });
            }
        }
        if self.min_series_size < MIN_SERIES_SIZE {
            return Err(LinkageError::SeriesSizeTooSmall {
                value: self.min_series_size,
            });
        }
        Ok(())
    }
}
