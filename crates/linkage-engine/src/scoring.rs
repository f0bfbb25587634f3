//! Weighted multi-criteria scorer (6 criteria).
//!
//! Criteria: crime type, modus operandi, geographic area, time-of-day,
//! evidence overlap (Jaccard), special-characteristics agreement.
//! Evidence and characteristics give partial credit; the rest are
//! all-or-nothing.

use linkage_core::config::WeightProfile;
use linkage_core::constants::SCORED_CHARACTERISTICS;
use linkage_core::models::{ComparisonResult, CrimeSceneRecord, SimilarityScore};

use crate::evidence;

/// Reason reported by the self-identity short-circuit.
pub const SAME_SCENE_REASON: &str = "Same crime scene";

/// Compare two records under a weight profile.
///
/// If both records carry the same persisted identity the comparison
/// short-circuits to a full match. Otherwise each criterion contributes
/// up to its configured weight; the sum is clamped to [0, 100] and
/// rounded to 2 decimals. Match reasons come out in criterion order.
pub fn compare<'a>(
    base: &'a CrimeSceneRecord,
    other: &'a CrimeSceneRecord,
    profile: &WeightProfile,
) -> ComparisonResult<'a> {
    if base.id.is_persisted() && other.id.is_persisted() && base.id == other.id {
        return ComparisonResult::new(
            base,
            other,
            SimilarityScore::FULL,
            vec![SAME_SCENE_REASON.to_string()],
        );
    }

    let mut points = 0.0;
    let mut reasons = Vec::new();

    // Criterion 1: crime type — exact match on set catalog ids.
    if base.crime_type.is_set()
        && other.crime_type.is_set()
        && base.crime_type == other.crime_type
    {
        points += profile.crime_type;
        reasons.push("Crime type match".to_string());
    }

    // Criterion 2: modus operandi — same id rule as crime type.
    if base.modus_operandi.is_set()
        && other.modus_operandi.is_set()
        && base.modus_operandi == other.modus_operandi
    {
        points += profile.modus_operandi;
        reasons.push("Modus operandi match".to_string());
    }

    // Criterion 3: geographic area.
    if base.area == other.area {
        points += profile.area;
        reasons.push("Same geographic area".to_string());
    }

    // Criterion 4: time-of-day slot.
    if base.time_of_day == other.time_of_day {
        points += profile.time_of_day;
        reasons.push("Same time-of-day".to_string());
    }

    // Criterion 5: physical evidence — Jaccard-scaled partial credit.
    let evidence_similarity = evidence::jaccard(&base.evidence, &other.evidence);
    points += evidence_similarity * profile.evidence;
    if evidence_similarity > 0.5 {
        reasons.push(format!(
            "Similar physical evidence ({}%)",
            round1(evidence_similarity * 100.0)
        ));
    } else if evidence_similarity > 0.0 {
        reasons.push(format!(
            "Some common evidence ({}%)",
            round1(evidence_similarity * 100.0)
        ));
    }

    // Criterion 6: special characteristics — agreement (in either value)
    // over the three scored booleans. unknown_perpetrator is not scored.
    let characteristic_points =
        characteristics_agreement(base, other) * profile.characteristics;
    points += characteristic_points;
    if characteristic_points > 0.0 {
        reasons.push("Special characteristics compatible".to_string());
    }

    ComparisonResult::new(base, other, SimilarityScore::new(points), reasons)
}

/// Fraction in {0, 1/3, 2/3, 1} of scored booleans holding the same value
/// in both records.
fn characteristics_agreement(base: &CrimeSceneRecord, other: &CrimeSceneRecord) -> f64 {
    let agreements = [
        base.used_violence == other.used_violence,
        base.was_planned == other.was_planned,
        base.multiple_perpetrators == other.multiple_perpetrators,
    ]
    .iter()
    .filter(|same| **same)
    .count();

    agreements as f64 / SCORED_CHARACTERISTICS as f64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
