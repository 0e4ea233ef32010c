//! Core types, naming utilities, and the neutral markup tree for pagekit.
//!
//! This crate provides the foundational types used by the catalog and
//! code generation crates:
//! - Page archetypes and output targets
//! - Identifier case conversion for component names and file paths
//! - The design context record consumed by the document assembler
//! - The neutral markup node tree every page body is expressed in
//! - Error types

pub mod ast;
pub mod design;
pub mod errors;
pub mod naming;
pub mod types;

pub use ast::{element, AttrName, Attribute, Element, Node};
pub use design::{ColorPalette, DesignContext, DesignContextProvider, Typography};
pub use errors::{CoreError, Result};
pub use naming::{to_component_name, to_display_title, to_identifier, to_path_segment};
pub use types::{Archetype, ArchetypeName, Dialect, Target};
