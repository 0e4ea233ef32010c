//! Angular standalone components with an inline template.

use pagekit_core::{Dialect, Target};
use serde_json::json;

use super::{page_path, AssemblyContext, Assembler, GeneratedFile, PageSource};
use crate::error::Result;
use crate::templates::TemplateEngine;

const SKELETON: &str = r#"import { Component } from '@angular/core';

@Component({
  selector: 'app-{{kebab_case name}}-page',
  standalone: true,
  template: `
{{indent body 4}}
  `,
})
export class {{pascal_case name}}PageComponent {}
"#;

/// Escape text for embedding in a JavaScript template literal.
///
/// Backslashes are doubled first so the later escapes survive.
pub fn escape_template_literal(body: &str) -> String {
    body.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Replace characters Angular's template syntax claims with HTML entities.
///
/// `@` opens a control-flow block and braces open interpolations and ICU
/// expressions, so literal occurrences must be written as entities.
pub fn escape_angular_template(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    for c in body.chars() {
        match c {
            '@' => out.push_str("&#64;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// Assembler for Angular: a decorated component class whose template is
/// an inline template literal.
pub struct AngularAssembler<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> AngularAssembler<'a> {
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }
}

impl Default for AngularAssembler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler for AngularAssembler<'_> {
    fn target(&self) -> Target {
        Target::Angular
    }

    fn assemble(&self, page: &PageSource<'_>, _ctx: &AssemblyContext<'_>) -> Result<GeneratedFile> {
        let body = escape_template_literal(&escape_angular_template(
            &page.body.render(Dialect::Html),
        ));
        let content = self.engine.render_string(
            SKELETON,
            &json!({
                "name": page.name,
                "body": body,
            }),
        )?;

        Ok(GeneratedFile {
            path: page_path(page.name, "-page", "component.ts"),
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
    fn test_escape_template_literal() {
        assert_eq!(escape_template_literal("a`b"), "a\\`b");
        assert_eq!(escape_template_literal("cost ${x}"), "cost \\${x}");
        assert_eq!(escape_template_literal("C:\\path"), "C:\\\\path");
        assert_eq!(escape_template_literal("$5 {a}"), "$5 {a}");
    }

    #[test]
    fn test_escape_angular_template() {
        assert_eq!(
            escape_angular_template("<td>lindsay@example.com</td>"),
            "<td>lindsay&#64;example.com</td>"
        );
        assert_eq!(escape_angular_template("{{ total }}"), "&#123;&#123; total &#125;&#125;");
        assert_eq!(escape_angular_template("<p class=\"x\">ok</p>"), "<p class=\"x\">ok</p>");
    }

    #[test]
    fn test_angular_component() {
        let design = DesignContext::default();
        let ctx = AssemblyContext {
            app_name: "Acme",
            dark_mode: false,
            design: &design,
            typescript: true,
        };
        let page = PageSource {
            name: "crud_table",
            body: Body::Markup("<p className=\"x\">Use `npm` for ${price}</p>"),
        };
        let file = AngularAssembler::new().assemble(&page, &ctx).unwrap();
        assert_eq!(file.path, "pages/crud-table-page.component.ts");
        assert!(file.content.contains("selector: 'app-crud-table-page'"));
        assert!(file.content.contains("export class CrudTablePageComponent {}"));
        assert!(file
            .content
            .contains("    <p class=\"x\">Use \\`npm\\` for $&#123;price&#125;</p>"));
    }
}
