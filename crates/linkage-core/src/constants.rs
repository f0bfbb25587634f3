/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score at or above which a pair is classified as a series candidate.
pub const SERIES_CANDIDATE_THRESHOLD: f64 = 75.0;

/// Score at or above which a pair is classified as a probable connection.
pub const PROBABLE_CONNECTION_THRESHOLD: f64 = 60.0;

/// Default minimum score for pairwise similarity search.
pub const DEFAULT_SEARCH_THRESHOLD: f64 = 60.0;

/// Minimum score between a seed and a member during series detection.
pub const SERIES_SEARCH_THRESHOLD: f64 = 75.0;

/// Minimum number of scenes that form a series.
pub const MIN_SERIES_SIZE: usize = 3;

/// Number of boolean scene characteristics compared by the scorer.
pub const SCORED_CHARACTERISTICS: usize = 3;

/// A weight profile's criterion weights must sum to this total.
pub const PROFILE_WEIGHT_TOTAL: f64 = 100.0;
