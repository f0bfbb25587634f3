//! # linkage-core
//!
//! Foundation crate for the crime linkage engine.
//! Defines the domain model, errors, configuration, and constants.
//! The engine crate depends on this; external collaborators (persistence,
//! presentation) construct these types and consume the results.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{DetectionConfig, ProfileRegistry, WeightProfile};
pub use errors::{LinkageError, LinkageResult};
pub use models::{
    CatalogId, Classification, ComparisonResult, CrimeSceneRecord, EvidenceKind, GeographicArea,
    SceneId, SeriesGroup, SimilarityScore, TimeOfDay,
};
