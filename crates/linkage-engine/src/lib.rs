//! # linkage-engine
//!
//! Similarity scoring and series detection over crime-scene records.
//!
//! The pipeline is a one-way flow: records → weighted multi-criteria
//! scorer → [`ComparisonResult`](linkage_core::ComparisonResult) →
//! similarity search ranks many results → series detector groups records
//! into probable series. Every stage is a pure function over immutable
//! input snapshots; [`LinkageEngine`] ties them to a configuration and
//! adds tracing.

pub mod engine;
pub mod evidence;
pub mod scoring;
pub mod search;
pub mod series;

pub use engine::LinkageEngine;
