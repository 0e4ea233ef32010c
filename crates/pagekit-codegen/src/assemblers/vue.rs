//! Vue single-file components.

use pagekit_core::{Dialect, Target};
use serde_json::json;

use super::{page_path, AssemblyContext, Assembler, GeneratedFile, PageSource};
use crate::error::Result;
use crate::templates::TemplateEngine;

const SKELETON: &str = r#"<script setup{{lang}}>
// {{pascal_case name}}Page
</script>

<template>
{{indent body 2}}
</template>
"#;

/// Assembler for Vue SFCs: an empty `<script setup>` block and a
/// `<template>` holding the body in HTML syntax.
pub struct VueAssembler<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> VueAssembler<'a> {
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }
}

impl Default for VueAssembler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler for VueAssembler<'_> {
    fn target(&self) -> Target {
        Target::Vue
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
            path: page_path(page.name, "", "vue"),
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
    fn test_vue_sfc() {
        let design = DesignContext::default();
        let ctx = AssemblyContext {
            app_name: "Acme",
            dark_mode: false,
            design: &design,
            typescript: true,
        };
        let page = PageSource {
            name: "auth_login",
            body: Body::Markup("<label htmlFor=\"email\" className=\"block\">Email</label>"),
        };
        let file = VueAssembler::new().assemble(&page, &ctx).unwrap();
        assert_eq!(file.path, "pages/auth-login.vue");
        assert_eq!(
            file.content,
            "<script setup lang=\"ts\">\n// AuthLoginPage\n</script>\n\n<template>\n  <label for=\"email\" class=\"block\">Email</label>\n</template>\n"
        );
    }
}
