//! LinkageEngine: configuration-bound facade over the scoring pipeline.
//!
//! The stage functions (`scoring::compare`, `search::find_similar`,
//! `series::detect_series`) stay pure; this orchestrator binds them to a
//! resolved weight profile and detection config and adds tracing.

use tracing::{debug, info};

use linkage_core::config::{DetectionConfig, ProfileRegistry, WeightProfile};
use linkage_core::errors::LinkageResult;
use linkage_core::models::{ComparisonResult, CrimeSceneRecord, SeriesGroup};

use crate::{scoring, search, series};

/// The main linkage engine. Holds a validated config and the weight
/// profile it names, resolved once at construction.
#[derive(Debug)]
pub struct LinkageEngine {
    config: DetectionConfig,
    profile: WeightProfile,
}

impl LinkageEngine {
    /// Build an engine from a config, resolving its profile name against
    /// the registry. Fails on invalid thresholds, unknown profile names,
    /// or profiles whose weights do not sum to 100.
    pub fn new(config: DetectionConfig, registry: &ProfileRegistry) -> LinkageResult<Self> {
        config.validate()?;
        let profile = registry.get(&config.profile)?.clone();
        profile.validate()?;
        Ok(Self { config, profile })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn profile(&self) -> &WeightProfile {
        &self.profile
    }

    /// Compare two records under the engine's profile.
    pub fn compare<'a>(
        &self,
        base: &'a CrimeSceneRecord,
        other: &'a CrimeSceneRecord,
    ) -> ComparisonResult<'a> {
        let result = scoring::compare(base, other, &self.profile);
        debug!(
            base = %base.id,
            compared = %other.id,
            score = result.score.value(),
            classification = ?result.classification,
            "compared scenes"
        );
        result
    }

    /// Rank candidates similar to `base` using the configured default
    /// threshold.
    pub fn find_similar<'a>(
        &self,
        base: &'a CrimeSceneRecord,
        candidates: &'a [CrimeSceneRecord],
    ) -> LinkageResult<Vec<ComparisonResult<'a>>> {
        self.find_similar_with_threshold(base, candidates, self.config.search_threshold)
    }

    /// Rank candidates similar to `base` above an explicit threshold.
    pub fn find_similar_with_threshold<'a>(
        &self,
        base: &'a CrimeSceneRecord,
        candidates: &'a [CrimeSceneRecord],
        threshold: f64,
    ) -> LinkageResult<Vec<ComparisonResult<'a>>> {
        let results = search::find_similar(base, candidates, threshold, &self.profile)?;
        info!(
            base = %base.id,
            candidates = candidates.len(),
            threshold,
            hits = results.len(),
            "similarity search complete"
        );
        Ok(results)
    }

    /// Detect probable crime series across the whole record collection.
    pub fn detect_series<'a>(
        &self,
        records: &'a [CrimeSceneRecord],
    ) -> LinkageResult<Vec<SeriesGroup<'a>>> {
        let groups = series::detect_series(records, &self.config, &self.profile)?;
        info!(
            records = records.len(),
            threshold = self.config.series_threshold,
            groups = groups.len(),
            "series detection complete"
        );
        Ok(groups)
    }
}

impl Default for LinkageEngine {
    fn default() -> Self {
        Self {
            config: DetectionConfig::default(),
            profile: WeightProfile::standard(),
        }
    }
}
