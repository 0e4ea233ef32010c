//! Svelte components.

use pagekit_core::{Dialect, Target};
use serde_json::json;

use super::{page_path, AssemblyContext, Assembler, GeneratedFile, PageSource};
use crate::error::Result;
use crate::templates::TemplateEngine;

const SKELETON: &str = r#"<script{{lang}}>
  // {{pascal_case name}}Page
</script>

{{body}}
"#;

/// Assembler for Svelte: an empty script block followed by the markup.
pub struct SvelteAssembler<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> SvelteAssembler<'a> {
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }
}

impl Default for SvelteAssembler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler for SvelteAssembler<'_> {
    fn target(&self) -> Target {
        Target::Svelte
    }

    fn assemble(&self, page: &PageSource<'_>, ctx: &AssemblyContext<'_>) -> Result<GeneratedFile> {
        let lang = if ctx.typescript { " lang=\"ts\"" } else { "" };
        let content = self.engine.render_string(
            SKELETON,
            &json!({
                "lang": lang,
                "name": page.name,
                "body": page.body.render(Dialect::Html),
            }),
        )?;

        Ok(GeneratedFile {
            path: page_path(page.name, "", "svelte"),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemblers::Body;
    use pagekit_core::DesignContext;

    #[test]
    fn test_svelte_component() {
        let design = DesignContext::default();
        let ctx = AssemblyContext {
            app_name: "Acme",
            dark_mode: false,
            design: &design,
            typescript: false,
        };
        let page = PageSource {
            name: "BlogList",
            body: Body::Markup("{/* Posts */}\n<section className=\"py-24\"></section>"),
        };
        let file = SvelteAssembler::new().assemble(&page, &ctx).unwrap();
        assert_eq!(file.path, "pages/blog-list.svelte");
        assert_eq!(
            file.content,
            "<script>\n  // BlogListPage\n</script>\n\n<!-- Posts -->\n<section class=\"py-24\"></section>\n"
        );
    }
}
