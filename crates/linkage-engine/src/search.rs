//! Pairwise similarity search: score every candidate against a base
//! record, filter by threshold, rank by score.

use std::cmp::Ordering;

use linkage_core::config::WeightProfile;
use linkage_core::errors::{LinkageError, LinkageResult};
use linkage_core::models::{ComparisonResult, CrimeSceneRecord};

use crate::scoring;

/// Score `base` against every candidate with a different identity and
/// return the results with score >= `threshold`, sorted by score
/// descending. The sort is stable: equal scores keep candidate input
/// order, so results are deterministic.
pub fn find_similar<'a>(
    base: &'a CrimeSceneRecord,
    candidates: &'a [CrimeSceneRecord],
    threshold: f64,
    profile: &WeightProfile,
) -> LinkageResult<Vec<ComparisonResult<'a>>> {
    if !(0.0..=100.0).contains(&threshold) {
        return Err(LinkageError::ThresholdOutOfRange { value: threshold });
    }

    let mut results: Vec<ComparisonResult<'a>> = candidates
        .iter()
        .filter(|candidate| candidate.id != base.id)
        .map(|candidate| scoring::compare(base, candidate, profile))
        .filter(|comparison| comparison.score.value() >= threshold)
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkage_core::models::{CatalogId, EvidenceKind, GeographicArea, SceneId, TimeOfDay};

    fn record(id: u64, crime_type: u32, area: GeographicArea) -> CrimeSceneRecord {
        CrimeSceneRecord {
            id: SceneId(id),
            crime_type: CatalogId(crime_type),
            modus_operandi: CatalogId(1),
            area,
            time_of_day: TimeOfDay::Dawn,
            evidence: [EvidenceKind::BrokenGlass].into(),
            used_violence: false,
            was_planned: true,
            multiple_perpetrators: false,
            unknown_perpetrator: false,
        }
    }

    #[test]
    fn base_is_excluded_even_when_present_in_candidates() {
        let base = record(1, 1, GeographicArea::Center);
        let pool = vec![
            record(1, 1, GeographicArea::Center),
            record(2, 1, GeographicArea::Center),
        ];
        let results = find_similar(&base, &pool, 0.0, &WeightProfile::standard()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].compared.id, SceneId(2));
    }

    #[test]
    fn threshold_filters_and_sort_is_descending() {
        let base = record(1, 1, GeographicArea::Center);
        let pool = vec![
            record(2, 9, GeographicArea::West),  // low score
            record(3, 1, GeographicArea::Center), // identical → 100
            record(4, 1, GeographicArea::West),  // area differs → 80
        ];
        let profile = WeightProfile::standard();
        let results = find_similar(&base, &pool, 60.0, &profile).unwrap();
        let scores: Vec<f64> = results.iter().map(|r| r.score.value()).collect();
        assert_eq!(scores, vec![100.0, 80.0]);
        assert!(results.iter().all(|r| r.score.value() >= 60.0));
    }

    #[test]
    fn equal_scores_keep_candidate_input_order() {
        let base = record(1, 1, GeographicArea::Center);
        let pool = vec![
            record(5, 1, GeographicArea::Center),
            record(3, 1, GeographicArea::Center),
            record(8, 1, GeographicArea::Center),
        ];
        let results = find_similar(&base, &pool, 0.0, &WeightProfile::standard()).unwrap();
        let ids: Vec<SceneId> = results.iter().map(|r| r.compared.id).collect();
        assert_eq!(ids, vec![SceneId(5), SceneId(3), SceneId(8)]);
    }

    #[test]
    fn unpersisted_candidates_share_id_zero_and_are_excluded() {
        // Raw-id exclusion: an id-0 base excludes id-0 candidates too.
        let base = record(0, 1, GeographicArea::Center);
        let pool = vec![
            record(0, 1, GeographicArea::Center),
            record(2, 1, GeographicArea::Center),
        ];
        let results = find_similar(&base, &pool, 0.0, &WeightProfile::standard()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].compared.id, SceneId(2));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let base = record(1, 1, GeographicArea::Center);
        let pool: Vec<CrimeSceneRecord> = Vec::new();
        assert!(matches!(
            find_similar(&base, &pool, -0.1, &WeightProfile::standard()),
            Err(LinkageError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            find_similar(&base, &pool, 100.1, &WeightProfile::standard()),
            Err(LinkageError::ThresholdOutOfRange { .. })
        ));
    }

    #[test]
    fn empty_candidates_give_empty_results() {
        let base = record(1, 1, GeographicArea::Center);
        let results = find_similar(&base, &[], 60.0, &WeightProfile::standard()).unwrap();
        assert!(results.is_empty());
    }
}
