//! React and Next.js function components.

use pagekit_core::{Dialect, Target};
use serde_json::json;

use super::{page_path, AssemblyContext, Assembler, GeneratedFile, PageSource};
use crate::error::Result;
use crate::templates::TemplateEngine;

const SKELETON: &str = r#"{{directive}}export default function {{pascal_case name}}Page() {
  return (
{{indent body 4}}
  );
}
"#;

const CLIENT_DIRECTIVE: &str = "'use client';\n\n";

/// Assembler for JSX component frameworks.
///
/// The body is emitted unmodified. The Next.js variant marks the file as a
/// client component.
pub struct ReactAssembler<'a> {
    engine: TemplateEngine<'a>,
    client_directive: bool,
}

impl<'a> ReactAssembler<'a> {
    /// Plain React component.
    pub fn react() -> Self {
        Self {
            engine: TemplateEngine::new(),
            client_directive: false,
        }
    }

    /// Next.js client component.
    pub fn nextjs() -> Self {
        Self {
            engine: TemplateEngine::new(),
            client_directive: true,
        }
    }
}

impl Assembler for ReactAssembler<'_> {
    fn target(&self) -> Target {
        if self.client_directive {
            Target::Nextjs
        } else {
            Target::React
        }
    }

    fn assemble(&self, page: &PageSource<'_>, ctx: &AssemblyContext<'_>) -> Result<GeneratedFile> {
        let directive = if self.client_directive {
            CLIENT_DIRECTIVE
        } else {
            ""
        };
        let content = self.engine.render_string(
            SKELETON,
            &json!({
                "directive": directive,
                "name": page.name,
                "body": page.body.render(Dialect::Jsx),
            }),
        )?;
        let ext = if ctx.typescript { "tsx" } else { "jsx" };

        Ok(GeneratedFile {
            path: page_path(page.name, "", ext),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemblers::Body;
    use pagekit_core::DesignContext;

    fn ctx(design: &DesignContext) -> AssemblyContext<'_> {
        AssemblyContext {
            app_name: "Acme",
            dark_mode: false,
            design,
            typescript: true,
        }
    }

    #[test]
    fn test_react_component() {
        let design = DesignContext::default();
        let page = PageSource {
            name: "auth_login",
            body: Body::Markup("<div className=\"p-4\">Hi</div>"),
        };
        let file = ReactAssembler::react().assemble(&page, &ctx(&design)).unwrap();
        assert_eq!(file.path, "pages/auth-login.tsx");
        assert_eq!(
            file.content,
            "export default function AuthLoginPage() {\n  return (\n    <div className=\"p-4\">Hi</div>\n  );\n}\n"
        );
    }

    #[test]
    fn test_nextjs_adds_client_directive() {
        let design = DesignContext::default();
        let page = PageSource {
            name: "dashboard",
            body: Body::Markup("<main></main>"),
        };
        let react = ReactAssembler::react().assemble(&page, &ctx(&design)).unwrap();
        let next = ReactAssembler::nextjs().assemble(&page, &ctx(&design)).unwrap();
        assert_eq!(next.content, format!("{CLIENT_DIRECTIVE}{}", react.content));
        assert_eq!(next.path, react.path);
    }

    #[test]
    fn test_javascript_extension() {
        let design = DesignContext::default();
        let page = PageSource {
            name: "landing",
            body: Body::Markup("<div></div>"),
        };
        let js = AssemblyContext {
            typescript: false,
            ..ctx(&design)
        };
        let file = ReactAssembler::react().assemble(&page, &js).unwrap();
        assert_eq!(file.path, "pages/landing.jsx");
    }
}
