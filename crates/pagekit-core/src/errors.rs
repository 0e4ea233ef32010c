//! Error types for pagekit core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised when strictly parsing caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Archetype name outside the closed enumeration.
    #[error("unknown archetype: {0}")]
    UnknownArchetype(String),

    /// Target name outside the closed enumeration.
    #[error("unknown target: {0}")]
    UnknownTarget(String),
}
