use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Persistent identifier of a crime-scene record.
/// `0` means the record has not been persisted yet; such records never
/// trigger the self-identity short-circuit. Search exclusion compares raw
/// ids, so two unpersisted records still exclude each other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct SceneId(pub u64);

impl SceneId {
    /// Whether this id refers to a persisted record.
    pub fn is_persisted(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Foreign reference into an external catalog (crime types, modus operandi).
/// `0` means unset. The engine treats the value as opaque; it never checks
/// that the referenced catalog entry exists or is active.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CatalogId(pub u32);

impl CatalogId {
    pub fn is_set(self) -> bool {
        self.0 > 0
    }
}

/// Geographic zone where the scene was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeographicArea {
    Center,
    North,
    South,
    East,
    West,
}

/// Time-of-day slot of the crime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 00:00–06:00
    Dawn,
    /// 06:00–12:00
    Morning,
    /// 12:00–18:00
    Afternoon,
    /// 18:00–24:00
    Night,
}

/// Kind of physical trace found at a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    BrokenGlass,
    Fingerprints,
    Blood,
    Hair,
    Fibers,
    Firearm,
}

/// A fully populated crime-scene record.
///
/// Owned and validated by the external retrieval collaborator; the engine
/// only reads it. Evidence is a set: how many times a kind was logged at
/// one scene carries no signal for linkage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeSceneRecord {
    pub id: SceneId,
    pub crime_type: CatalogId,
    pub modus_operandi: CatalogId,
    pub area: GeographicArea,
    pub time_of_day: TimeOfDay,
    pub evidence: BTreeSet<EvidenceKind>,
    pub used_violence: bool,
    pub was_planned: bool,
    pub multiple_perpetrators: bool,
    /// Recorded for investigators; never scored.
    pub unknown_perpetrator: bool,
}
