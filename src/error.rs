use thiserror::Error;

/// Errors from constructing a table with caller-chosen parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("a chained hash table needs at least one bucket")]
    ZeroBuckets,
}
