//! Error taxonomy for the seeding pipeline.
//!
//! Synthesis-layer errors abort the current run; identifier-resolution
//! failures are absorbed by fallbacks in `resolver` and never reach here.

use thiserror::Error;

/// Errors surfaced to the caller of the pipeline or a single stage.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A required parent identifier pool was empty after all fallbacks.
    #[error("missing dependency: {0}")]
    MissingDependency(String),

    /// Unique email generation collided twice in a row, even after the
    /// source's uniqueness tracker was cleared.
    #[error("unique email generation failed twice; aborting")]
    UniquenessRetryExhausted,

    /// Pre-flight dependency check found tables that must be populated
    /// before the requested stages can run.
    #[error("sanity check failed: {}", .0.join("; "))]
    SanityCheck(Vec<String>),

    /// The underlying database write failed.
    #[error("database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, SeedError>;
