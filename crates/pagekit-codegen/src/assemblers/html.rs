//! Standalone HTML documents.

use pagekit_core::{Dialect, Target};
use serde_json::json;

use super::{page_path, AssemblyContext, Assembler, GeneratedFile, PageSource};
use crate::error::Result;
use crate::templates::TemplateEngine;

const SKELETON: &str = r#"<!DOCTYPE html>
<html lang="en"{{html_attrs}}>
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{app_name}} - {{title_case name}}</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <script>
    tailwind.config = { darkMode: 'class' };
  </script>
  <style>
    :root {
      --color-primary: {{primary}};
      --color-background: {{background}};
      --color-foreground: {{foreground}};
      --font-family: {{font_family}};
    }
    body {
      font-family: var(--font-family);
      background-color: var(--color-background);
      color: var(--color-foreground);
    }
  </style>
</head>
<body>
{{indent body 2}}
</body>
</html>
"#;

/// Assembler for a complete HTML document.
///
/// The design context palette and font become CSS custom properties on
/// `:root`; dark mode adds `class="dark"` to the `<html>` element.
pub struct HtmlAssembler<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> HtmlAssembler<'a> {
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }
}

impl Default for HtmlAssembler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler for HtmlAssembler<'_> {
    fn target(&self) -> Target {
        Target::Html
    }

    fn assemble(&self, page: &PageSource<'_>, ctx: &AssemblyContext<'_>) -> Result<GeneratedFile> {
        let design = ctx.design.or_defaults();
        let html_attrs = if ctx.dark_mode { " class=\"dark\"" } else { "" };
        let content = self.engine.render_string(
            SKELETON,
            &json!({
                "html_attrs": html_attrs,
                "app_name": ctx.app_name,
                "name": page.name,
                "primary": design.color_palette.primary,
                "background": design.color_palette.background,
                "foreground": design.color_palette.foreground,
                "font_family": design.typography.font_family,
                "body": page.body.render(Dialect::Html),
            }),
        )?;

        Ok(GeneratedFile {
            path: page_path(page.name, "", "html"),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemblers::Body;
    use pagekit_core::DesignContext;

    fn assemble(dark_mode: bool, design: &DesignContext) -> GeneratedFile {
        let ctx = AssemblyContext {
            app_name: "Acme",
            dark_mode,
            design,
            typescript: true,
        };
        let page = PageSource {
            name: "pricing",
            body: Body::Markup("<main className=\"py-24\"></main>"),
        };
        HtmlAssembler::new().assemble(&page, &ctx).unwrap()
    }

    #[test]
    fn test_document_carries_design_variables() {
        let design = DesignContext::new("#ff5500", "#101010", "#fafafa", "Geist, sans-serif");
        let file = assemble(true, &design);
        assert_eq!(file.path, "pages/pricing.html");
        assert!(file.content.starts_with("<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">"));
        assert!(file.content.contains("--color-primary: #ff5500;"));
        assert!(file.content.contains("--color-background: #101010;"));
        assert!(file.content.contains("--color-foreground: #fafafa;"));
        assert!(file.content.contains("--font-family: Geist, sans-serif;"));
        assert!(file.content.contains("<title>Acme - Pricing</title>"));
        assert!(file.content.contains("  <main class=\"py-24\"></main>"));
    }

    #[test]
    fn test_light_document_has_no_dark_attribute() {
        let file = assemble(false, &DesignContext::default());
        assert!(file.content.contains("<html lang=\"en\">"));
    }

    #[test]
    fn test_blank_design_falls_back_to_defaults() {
        let design = DesignContext::new("", "", "", "");
        let file = assemble(false, &design);
        assert!(file.content.contains("--color-primary: #3b82f6;"));
        assert!(file.content.contains("--font-family: Inter, system-ui, sans-serif;"));
    }
}
