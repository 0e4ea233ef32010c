//! Canonical page bodies for every pagekit archetype.
//!
//! Each archetype has exactly one body producer. Producers build a neutral
//! markup tree from a [`BodyContext`] (dark-mode flag and application name);
//! code generators render that tree into each target's syntax.
//!
//! # Example
//!
//! ```
//! use pagekit_catalog::{BodyContext, BodyRegistry};
//! use pagekit_core::{Archetype, ArchetypeName};
//!
//! let registry = BodyRegistry::standard();
//! let body = registry.produce(
//!     &ArchetypeName::Known(Archetype::Landing),
//!     &BodyContext::new("Acme", false),
//! );
//! assert!(body.text_content().contains("Acme"));
//! ```

pub mod bodies;
pub mod context;
pub mod error;
pub mod kit;
pub mod registry;
pub mod snippets;

pub use bodies::placeholder;
pub use context::BodyContext;
pub use error::{CatalogError, Result};
pub use registry::{BodyProducer, BodyRegistry};
pub use snippets::{InMemorySnippetRegistry, Snippet, SnippetRegistry};
