use thiserror::Error;

/// Core error type shared across modelforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The snapshot violates internal invariants.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    /// Selection intent named no objects; the generation pass is skipped.
    #[error("no objects selected: specify object names or request all objects")]
    EmptySelection,
    /// A requested feature is not yet supported.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Convenience alias for results returned by modelforge crates.
pub type Result<T> = std::result::Result<T, Error>;
