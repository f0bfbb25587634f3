//! Evidence-set similarity via the Jaccard coefficient.

use std::collections::BTreeSet;

use linkage_core::EvidenceKind;

/// Jaccard coefficient over distinct evidence kinds: |A ∩ B| / |A ∪ B|.
///
/// Two empty sets are a vacuous full match (1.0); exactly one empty set
/// is no match (0.0). Result is always in [0.0, 1.0] and symmetric.
pub fn jaccard(a: &BTreeSet<EvidenceKind>, b: &BTreeSet<EvidenceKind>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();

    intersection as f64 / union as f64
}
