//! Model error type.
//!
//! The dynamics themselves cannot fail; errors only arise from rejected
//! configuration values or from a hand-built register that breaks the
//! ordering invariant.

use thiserror::Error;

/// The error type for `sov-core` and `sov-model`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SovError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("register invariant violated: {0}")]
    Invariant(String),
}

/// Shorthand result type for the model crates.
pub type SovResult<T> = Result<T, SovError>;
