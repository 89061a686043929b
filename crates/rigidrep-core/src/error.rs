//! Validation errors raised at construction time
//!
//! Every failure is immediate, local, and non-retryable: a malformed input
//! produces an error before any numeric work and no partially-constructed
//! object is observable. Singularities of the exponential/logarithm maps
//! (θ = 0, θ = π) are valid domain branches, never errors.

use thiserror::Error;

/// Construction-time validation errors
#[derive(Debug, Error)]
pub enum RepresentationError {
    /// Input matrix/vector does not match the required fixed shape
    #[error("invalid dimension: expected {expected}, got {got} elements")]
    InvalidDimension { expected: &'static str, got: usize },

    /// An input claiming to be a rotation fails orthonormality or the
    /// determinant = +1 test
    #[error("invalid rotation matrix: {reason}")]
    InvalidRotation { reason: &'static str },
}
