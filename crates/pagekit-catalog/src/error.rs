//! Error types for the body catalog.

use pagekit_core::Archetype;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while assembling the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An archetype has no registered body producer.
    #[error("no body producer registered for archetype '{0}'")]
    MissingProducer(Archetype),

    /// A snippet id was registered twice.
    #[error("duplicate snippet id: {0}")]
    DuplicateSnippet(String),
}
