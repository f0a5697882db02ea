//! Error types for affinum operations.
//!
//! Numeric degeneracy (division by zero, normalizing a zero vector, singular
//! matrices) is never reported here: it propagates as IEEE infinity/NaN or,
//! for the checked operations, as `None`.

use crate::uniform::UniformKind;
use thiserror::Error;

/// Errors raised at the boundary with the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AffineError {
    /// The target program has no uniform with this name.
    #[error("unknown uniform `{name}`")]
    UnknownUniform {
        /// Name that failed to resolve.
        name: String,
    },

    /// The uniform exists but is declared with a different type.
    #[error("uniform `{name}` expects {expected}, got {found}")]
    KindMismatch {
        /// Name of the uniform.
        name: String,
        /// Kind declared by the target.
        expected: UniformKind,
        /// Kind of the value supplied.
        found: UniformKind,
    },
}
