//! Error types for the linkage engine.
//!
//! Given well-formed inputs every engine operation is total; the only
//! failures are invalid-argument conditions surfaced at the call boundary.

/// Convenience alias used across the workspace.
pub type LinkageResult<T> = Result<T, LinkageError>;

/// Linkage engine errors.
#[derive(Debug, thiserror::Error)]
pub enum LinkageError {
    #[error("threshold out of range: {value} (expected 0 to 100)")]
    ThresholdOutOfRange { value: f64 },

    #[error("weight profile {name:?} sums to {total}, expected 100")]
    InvalidProfile { name: String, total: f64 },

    #[error("unknown weight profile: {name:?}")]
    UnknownProfile { name: String },

    #[error("minimum series size must be at least 3, got {value}")]
    SeriesSizeTooSmall { value: usize },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
