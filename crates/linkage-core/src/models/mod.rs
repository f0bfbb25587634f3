//! Domain model: crime-scene records and comparison outputs.

pub mod comparison;
pub mod scene;
pub mod score;

pub use comparison::{ComparisonResult, SeriesGroup};
pub use scene::{CatalogId, CrimeSceneRecord, EvidenceKind, GeographicArea, SceneId, TimeOfDay};
pub use score::{Classification, SimilarityScore};
