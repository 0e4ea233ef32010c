//! Printing the neutral markup tree in a target dialect.
//!
//! Block elements put each child on its own line, indented two spaces per
//! level. Elements whose children are only text and inline elements are
//! printed on a single line. The output has no trailing newline.

use pagekit_core::{AttrName, Dialect, Element, Node};

/// Elements that may stay on their parent's line.
const INLINE_TAGS: &[&str] = &["a", "b", "code", "em", "option", "span", "strong", "time"];

/// Print a tree in the given dialect.
pub fn render(node: &Node, dialect: Dialect) -> String {
    let mut out = String::new();
    write_block(&mut out, node, dialect, 0);
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Attribute keyword for a dialect.
pub fn attr_keyword(name: &AttrName, dialect: Dialect) -> &str {
    match (name, dialect) {
        (AttrName::Class, Dialect::Jsx) => "className",
        (AttrName::Class, Dialect::Html) => "class",
        (AttrName::LabelFor, Dialect::Jsx) => "htmlFor",
        (AttrName::LabelFor, Dialect::Html) => "for",
        (AttrName::StrokeWidth, Dialect::Jsx) => "strokeWidth",
        (AttrName::StrokeWidth, Dialect::Html) => "stroke-width",
        (AttrName::StrokeLinecap, Dialect::Jsx) => "strokeLinecap",
        (AttrName::StrokeLinecap, Dialect::Html) => "stroke-linecap",
        (AttrName::StrokeLinejoin, Dialect::Jsx) => "strokeLinejoin",
        (AttrName::StrokeLinejoin, Dialect::Html) => "stroke-linejoin",
        (AttrName::Other(name), _) => name,
    }
}

/// Comment syntax for a dialect.
pub fn comment(text: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::Jsx => format!("{{/* {text} */}}"),
        Dialect::Html => format!("<!-- {text} -->"),
    }
}

fn is_inline(el: &Element) -> bool {
    el.children.iter().all(|child| match child {
        Node::Text(_) => true,
        Node::Comment(_) => false,
        Node::Element(inner) => {
            INLINE_TAGS.contains(&inner.tag.as_str()) && is_inline(inner)
        }
    })
}

fn write_block(out: &mut String, node: &Node, dialect: Dialect, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Text(text) => {
            out.push_str(&indent);
            out.push_str(text);
            out.push('\n');
        }
        Node::Comment(text) => {
            out.push_str(&indent);
            out.push_str(&comment(text, dialect));
            out.push('\n');
        }
        Node::Element(el) if el.is_void() || is_inline(el) => {
            out.push_str(&indent);
            write_inline(out, el, dialect);
            out.push('\n');
        }
        Node::Element(el) => {
            out.push_str(&indent);
            write_open_tag(out, el, dialect);
            out.push('\n');
            for child in &el.children {
                write_block(out, child, dialect, depth + 1);
            }
            out.push_str(&indent);
            write_close_tag(out, el);
            out.push('\n');
        }
    }
}

fn write_inline(out: &mut String, el: &Element, dialect: Dialect) {
    if el.is_void() {
        out.push('<');
        out.push_str(&el.tag);
        write_attributes(out, el, dialect);
        out.push_str(" />");
        return;
    }
    write_open_tag(out, el, dialect);
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Comment(text) => out.push_str(&comment(text, dialect)),
            Node::Element(inner) => write_inline(out, inner, dialect),
        }
    }
    write_close_tag(out, el);
}

fn write_open_tag(out: &mut String, el: &Element, dialect: Dialect) {
    out.push('<');
    out.push_str(&el.tag);
    write_attributes(out, el, dialect);
    out.push('>');
}

fn write_close_tag(out: &mut String, el: &Element) {
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn write_attributes(out: &mut String, el: &Element, dialect: Dialect) {
    for attr in &el.attributes {
        out.push(' ');
        out.push_str(attr_keyword(&attr.name, dialect));
        if let Some(value) = &attr.value {
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_core::element;

    fn sample() -> Node {
        element("form")
            .class("space-y-4")
            .comment("Email")
            .child(element("label").label_for("email").text("Email"))
            .child(element("input").attr("id", "email").flag("required"))
            .child(
                element("p")
                    .text("No account? ")
                    .child(element("a").attr("href", "/signup").text("Sign up")),
            )
            .child(element("svg").child(element("path").stroke("2").attr("d", "M5 13l4 4L19 7")))
            .into()
    }

    #[test]
    fn test_render_jsx() {
        let expected = r#"<form className="space-y-4">
  {/* Email */}
  <label htmlFor="email">Email</label>
  <input id="email" required />
  <p>No account? <a href="/signup">Sign up</a></p>
  <svg>
    <path strokeLinecap="round" strokeLinejoin="round" strokeWidth="2" d="M5 13l4 4L19 7" />
  </svg>
</form>"#;
        assert_eq!(render(&sample(), Dialect::Jsx), expected);
    }

    #[test]
    fn test_render_html() {
        let out = render(&sample(), Dialect::Html);
        assert!(out.starts_with("<form class=\"space-y-4\">"));
        assert!(out.contains("<!-- Email -->"));
        assert!(out.contains("<label for=\"email\">Email</label>"));
        assert!(out.contains("stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"2\""));
        assert!(!out.contains("className"));
    }

    #[test]
    fn test_empty_element_stays_on_one_line() {
        let node: Node = element("div").class("h-4").into();
        assert_eq!(render(&node, Dialect::Html), "<div class=\"h-4\"></div>");
    }
}
