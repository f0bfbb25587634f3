use std::collections::BTreeSet;

use proptest::prelude::*;

use linkage_core::config::WeightProfile;
use linkage_core::models::{
    CatalogId, CrimeSceneRecord, EvidenceKind, GeographicArea, SceneId, TimeOfDay,
};
use linkage_engine::{evidence, scoring, search};

fn evidence_kind() -> impl Strategy<Value = EvidenceKind> {
    prop_oneof![
        Just(EvidenceKind::BrokenGlass),
        Just(EvidenceKind::Fingerprints),
        Just(EvidenceKind::Blood),
        Just(EvidenceKind::Hair),
        Just(EvidenceKind::Fibers),
        Just(EvidenceKind::Firearm),
    ]
}

fn evidence_set() -> impl Strategy<Value = BTreeSet<EvidenceKind>> {
    proptest::collection::btree_set(evidence_kind(), 0..=6)
}

fn area() -> impl Strategy<Value = GeographicArea> {
    prop_oneof![
        Just(GeographicArea::Center),
        Just(GeographicArea::North),
        Just(GeographicArea::South),
        Just(GeographicArea::East),
        Just(GeographicArea::West),
    ]
}

fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    prop_oneof![
        Just(TimeOfDay::Dawn),
        Just(TimeOfDay::Morning),
        Just(TimeOfDay::Afternoon),
        Just(TimeOfDay::Night),
    ]
}

prop_compose! {
    fn crime_scene()(
        id in 0u64..32,
        crime_type in 0u32..6,
        modus_operandi in 0u32..6,
        area in area(),
        time_of_day in time_of_day(),
        evidence in evidence_set(),
        used_violence in any::<bool>(),
        was_planned in any::<bool>(),
        multiple_perpetrators in any::<bool>(),
        unknown_perpetrator in any::<bool>(),
    ) -> CrimeSceneRecord {
        CrimeSceneRecord {
            id: SceneId(id),
            crime_type: CatalogId(crime_type),
            modus_operandi: CatalogId(modus_operandi),
            area,
            time_of_day,
            evidence,
            used_violence,
            was_planned,
            multiple_perpetrators,
            unknown_perpetrator,
        }
    }
}

proptest! {
    #[test]
    fn jaccard_is_bounded_and_symmetric(a in evidence_set(), b in evidence_set()) {
        let forward = evidence::jaccard(&a, &b);
        let backward = evidence::jaccard(&b, &a);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn jaccard_of_a_set_with_itself_is_one(a in evidence_set()) {
        prop_assert_eq!(evidence::jaccard(&a, &a), 1.0);
    }

    #[test]
    fn jaccard_against_empty_is_zero_for_non_empty(a in evidence_set()) {
        prop_assume!(!a.is_empty());
        prop_assert_eq!(evidence::jaccard(&a, &BTreeSet::new()), 0.0);
    }

    #[test]
    fn scores_are_bounded_under_both_builtin_profiles(
        a in crime_scene(),
        b in crime_scene(),
    ) {
        for profile in [WeightProfile::standard(), WeightProfile::geography_emphasis()] {
            let result = scoring::compare(&a, &b, &profile);
            prop_assert!((0.0..=100.0).contains(&result.score.value()));
        }
    }

    #[test]
    fn score_is_symmetric(a in crime_scene(), b in crime_scene()) {
        let profile = WeightProfile::standard();
        let forward = scoring::compare(&a, &b, &profile);
        let backward = scoring::compare(&b, &a, &profile);
        prop_assert_eq!(forward.score, backward.score);
        prop_assert_eq!(forward.classification, backward.classification);
    }

    #[test]
    fn search_respects_threshold_exclusion_and_order(
        base in crime_scene(),
        pool in proptest::collection::vec(crime_scene(), 0..24),
        threshold in 0.0f64..=100.0,
    ) {
        let results =
            search::find_similar(&base, &pool, threshold, &WeightProfile::standard()).unwrap();
        for result in &results {
            prop_assert!(result.score.value() >= threshold);
            prop_assert!(result.compared.id != base.id);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].score.value() >= pair[1].score.value());
        }
    }
}
