use serde::Serialize;

use super::scene::CrimeSceneRecord;
use super::score::{Classification, SimilarityScore};

/// Outcome of comparing two crime-scene records.
///
/// Borrows both inputs; results are transient values the presentation
/// collaborator renders or serializes, never something the engine stores.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult<'a> {
    pub base: &'a CrimeSceneRecord,
    pub compared: &'a CrimeSceneRecord,
    pub score: SimilarityScore,
    /// Human-readable descriptions of the criteria that matched,
    /// in criterion evaluation order.
    pub match_reasons: Vec<String>,
    pub classification: Classification,
}

impl<'a> ComparisonResult<'a> {
    pub fn new(
        base: &'a CrimeSceneRecord,
        compared: &'a CrimeSceneRecord,
        score: SimilarityScore,
        match_reasons: Vec<String>,
    ) -> Self {
        Self {
            base,
            compared,
            score,
            match_reasons,
            classification: score.classify(),
        }
    }
}

/// A probable crime series: the seed record first, then its matches in
/// descending-similarity order. At least 3 members by construction.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesGroup<'a> {
    members: Vec<&'a CrimeSceneRecord>,
}

impl<'a> SeriesGroup<'a> {
    /// Build a group from a seed and its ranked matches. Callers must have
    /// already checked the minimum-size rule.
    pub fn new(seed: &'a CrimeSceneRecord, matches: Vec<&'a CrimeSceneRecord>) -> Self {
        let mut members = Vec::with_capacity(matches.len() + 1);
        members.push(seed);
        members.extend(matches);
        Self { members }
    }

    pub fn seed(&self) -> &'a CrimeSceneRecord {
        self.members[0]
    }

    pub fn members(&self) -> &[&'a CrimeSceneRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
