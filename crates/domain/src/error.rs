//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum RebuilderError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// A value violates a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("confidence must be a positive number of frames")]
    NonPositiveConfidence,
    #[error("recognition timeout must be a positive number of seconds")]
    NonPositiveTimeout,
}
