//! Multi-target page synthesis for pagekit.
//!
//! Turns an archetype name and a target framework into one ready-to-drop
//! page file:
//! - React and Next.js (`.tsx` function components)
//! - Vue (single-file components)
//! - Angular (standalone components with inline templates)
//! - Svelte
//! - Standalone HTML documents
//!
//! # Example
//!
//! ```
//! use pagekit_codegen::{SynthesisRequest, Synthesizer};
//!
//! let synthesizer = Synthesizer::new();
//! let request = SynthesisRequest::new("auth_login", "vue").with_app_name("Acme");
//! let files = synthesizer.synthesize(&request).unwrap();
//!
//! assert_eq!(files[0].path, "pages/auth-login.vue");
//! assert!(files[0].content.contains("Acme"));
//! ```

pub mod assemblers;
pub mod dialect;
pub mod error;
pub mod request;
pub mod synthesizer;
pub mod templates;
pub mod transform;

pub use assemblers::{
    AngularAssembler, Assembler, AssemblyContext, Body, GeneratedFile, HtmlAssembler,
    PageSource, ReactAssembler, SvelteAssembler, VueAssembler,
};
pub use error::{CodegenError, Result};
pub use request::{FallbackPolicy, SynthesisOptions, SynthesisRequest};
pub use synthesizer::{SynthesisReport, Synthesizer};
pub use templates::TemplateEngine;
pub use transform::{Rule, SyntaxTransformer};
