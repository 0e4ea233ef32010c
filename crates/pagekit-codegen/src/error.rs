//! Error types for code generation.

use pagekit_catalog::CatalogError;
use pagekit_core::CoreError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during synthesis.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Caller input rejected under the strict fallback policy.
    #[error(transparent)]
    Input(#[from] CoreError),

    /// Body catalog is incomplete.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// File skeleton failed to render.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Request could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
