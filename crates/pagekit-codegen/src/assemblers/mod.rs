//! File assemblers, one per target.
//!
//! An assembler wraps a page body in the file skeleton its framework requires
//! and chooses the output path. Assemblers are archetype-agnostic: they only
//! see the archetype name (for identifiers and paths) and the body.

mod angular;
mod html;
mod react;
mod svelte;
mod vue;

pub use angular::AngularAssembler;
pub use html::HtmlAssembler;
pub use react::ReactAssembler;
pub use svelte::SvelteAssembler;
pub use vue::VueAssembler;

use pagekit_core::{to_path_segment, DesignContext, Dialect, Node, Target};
use serde::Serialize;

use crate::dialect;
use crate::error::Result;
use crate::transform::SyntaxTransformer;

/// Common trait for target assemblers.
pub trait Assembler: Send + Sync {
    /// Target this assembler emits.
    fn target(&self) -> Target;

    /// Build the output file for one page.
    fn assemble(&self, page: &PageSource<'_>, ctx: &AssemblyContext<'_>) -> Result<GeneratedFile>;
}

/// Page content handed to an assembler.
#[derive(Debug, Clone, Copy)]
pub struct PageSource<'a> {
    /// Archetype name as requested; drives identifiers and the output path.
    pub name: &'a str,
    pub body: Body<'a>,
}

/// A page body, either as a tree or as neutral markup text.
#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    Tree(&'a Node),
    Markup(&'a str),
}

impl Body<'_> {
    /// Body text in `dialect`. Trees are printed directly; neutral markup
    /// text goes through the [`SyntaxTransformer`].
    pub fn render(&self, dialect: Dialect) -> String {
        match self {
            Self::Tree(node) => dialect::render(node, dialect),
            Self::Markup(markup) => SyntaxTransformer::for_dialect(dialect).transform(markup),
        }
    }
}

/// Per-call settings shared by all assemblers.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyContext<'a> {
    pub app_name: &'a str,
    pub dark_mode: bool,
    pub design: &'a DesignContext,
    /// Emit TypeScript flavored files where the target offers a choice.
    pub typescript: bool,
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// File path relative to project root.
    pub path: String,
    /// File content.
    pub content: String,
}

/// `pages/<kebab-name><suffix>.<ext>`
pub(crate) fn page_path(name: &str, suffix: &str, ext: &str) -> String {
    format!("pages/{}{}.{}", to_path_segment(name), suffix, ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_core::element;

    #[test]
    fn test_page_path() {
        assert_eq!(page_path("auth_login", "", "vue"), "pages/auth-login.vue");
        assert_eq!(
            page_path("crud_table", "-page", "component.ts"),
            "pages/crud-table-page.component.ts"
        );
    }

    #[test]
    fn test_tree_and_markup_bodies_agree() {
        let node: Node = element("label").label_for("q").class("sr-only").text("Search").into();
        let markup = dialect::render(&node, Dialect::Jsx);
        for d in [Dialect::Jsx, Dialect::Html] {
            assert_eq!(Body::Tree(&node).render(d), Body::Markup(&markup).render(d));
        }
    }
}
