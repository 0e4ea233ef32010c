//! Template engine for file skeletons.

use handlebars::Handlebars;
use pagekit_core::{to_display_title, to_identifier, to_path_segment};
use serde::Serialize;

use crate::error::{CodegenError, Result};

/// Template engine using Handlebars.
///
/// Output is never HTML-escaped: bodies and application names are emitted
/// verbatim. Strict mode turns a missing template variable into an error.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        // Component identifier
        handlebars.register_helper(
            "pascal_case",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&to_identifier(param))?;
                    Ok(())
                },
            ),
        );

        // Path segment / selector
        handlebars.register_helper(
            "kebab_case",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&to_path_segment(param))?;
                    Ok(())
                },
            ),
        );

        // Human-readable title
        handlebars.register_helper(
            "title_case",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&to_display_title(param))?;
                    Ok(())
                },
            ),
        );

        // Indent helper
        handlebars.register_helper(
            "indent",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let content = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    let spaces = h
                        .param(1)
                        .and_then(|v| v.value().as_u64())
                        .unwrap_or(4) as usize;

                    out.write(&indent(content, spaces))?;
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefix every non-blank line of `content` with `spaces` spaces.
pub fn indent(content: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    content
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_simple() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("Hello, {{name}}!", &json!({"name": "World"}))
            .unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_no_html_escaping() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("{{value}}", &json!({"value": "'use client'; <a & b>"}))
            .unwrap();
        assert_eq!(result, "'use client'; <a & b>");
    }

    #[test]
    fn test_case_helpers() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string(
                "{{pascal_case name}} {{kebab_case name}} {{title_case name}}",
                &json!({"name": "crud_table"}),
            )
            .unwrap();
        assert_eq!(result, "CrudTable crud-table Crud Table");
    }

    #[test]
    fn test_pascal_case_helper_emits_valid_identifier() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("{{pascal_case name}}Page", &json!({"name": "404 page"}))
            .unwrap();
        assert_eq!(result, "Page404PagePage");
    }

    #[test]
    fn test_indent_helper() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("{{indent body 2}}", &json!({"body": "<div>\n\n  <p>x</p>\n</div>"}))
            .unwrap();
        assert_eq!(result, "  <div>\n\n    <p>x</p>\n  </div>");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variables() {
        let engine = TemplateEngine::new();
        assert!(engine.render_string("{{missing}}", &json!({})).is_err());
    }
}
