//! Greedy series detection: group mutually similar scenes.
//!
//! Single pass in input order. Each unassigned record seeds a similarity
//! search; a group is accepted when seed + matches reach the minimum
//! size, and all members are then marked assigned. Assigned records are
//! excluded both as future seeds and as members of later groups, so the
//! resulting groups are disjoint.

use std::collections::HashSet;

use linkage_core::config::{DetectionConfig, WeightProfile};
use linkage_core::errors::LinkageResult;
use linkage_core::models::{CrimeSceneRecord, SceneId, SeriesGroup};

use crate::search;

/// Detect probable crime series in `records`.
///
/// Fewer records than the minimum group size short-circuits to an empty
/// list. Groups come out in detection order; members within a group are
/// ordered seed first, then by descending similarity to the seed.
pub fn detect_series<'a>(
    records: &'a [CrimeSceneRecord],
    config: &DetectionConfig,
    profile: &WeightProfile,
) -> LinkageResult<Vec<SeriesGroup<'a>>> {
    if records.len() < config.min_series_size {
        return Ok(Vec::new());
    }

    let mut groups = Vec::new();
    let mut assigned: HashSet<SceneId> = HashSet::new();

    for record in records {
        if assigned.contains(&record.id) {
            continue;
        }

        let mut similar =
            search::find_similar(record, records, config.series_threshold, profile)?;
        // A record claimed by an earlier group cannot join another one;
        // drop such matches before the size check so groups stay disjoint.
        similar.retain(|comparison| !assigned.contains(&comparison.compared.id));

        if similar.len() + 1 >= config.min_series_size {
            let matches: Vec<&CrimeSceneRecord> = similar
                .iter()
                .map(|comparison| comparison.compared)
                .collect();

            assigned.insert(record.id);
            for member in &matches {
                assigned.insert(member.id);
            }

            groups.push(SeriesGroup::new(record, matches));
        }
    }

    Ok(groups)
}
