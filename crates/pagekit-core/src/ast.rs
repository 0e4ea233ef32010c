//! Neutral markup tree.
//!
//! Page bodies are authored once as a small tree of elements, text and
//! comments. Attributes whose spelling differs between markup dialects
//! (class lists, label targets, SVG stroke presentation) are tagged so each
//! dialect can print its own keyword without rewriting text.

use serde::{Deserialize, Serialize};

/// Elements that never have children and are printed self-closing.
const VOID_TAGS: &[&str] = &[
    "area", "br", "circle", "col", "hr", "img", "input", "line", "link", "meta", "path",
    "polyline", "rect", "source",
];

/// A node in the neutral markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a comment node.
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment(content.into())
    }

    /// Visit this node and all of its descendants, depth first.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        if let Self::Element(el) = self {
            for child in &el.children {
                child.walk(f);
            }
        }
    }

    /// Concatenated text of this subtree, without markup.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| {
            if let Node::Text(text) = node {
                out.push_str(text);
            }
        });
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Attribute names that are spelled differently per dialect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrName {
    /// CSS class list.
    Class,
    /// Label target (`for` on a `<label>`).
    LabelFor,
    StrokeWidth,
    StrokeLinecap,
    StrokeLinejoin,
    /// Any attribute spelled identically everywhere.
    Other(String),
}

/// A single attribute. A `None` value is printed as a bare boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: AttrName,
    pub value: Option<String>,
}

/// A markup element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// Start building an element.
pub fn element(tag: impl Into<String>) -> Element {
    Element {
        tag: tag.into(),
        attributes: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    /// Whether this element is printed self-closing.
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }

    /// Add classes. Calling this again appends to the existing class list.
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        let classes = classes.into();
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|a| a.name == AttrName::Class)
        {
            let value = existing.value.get_or_insert_with(String::new);
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(&classes);
            return self;
        }
        self.with_attr(AttrName::Class, Some(classes))
    }

    /// Point a label at a form control id.
    pub fn label_for(self, id: impl Into<String>) -> Self {
        self.with_attr(AttrName::LabelFor, Some(id.into()))
    }

    /// Add a plain attribute.
    pub fn attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_attr(AttrName::Other(name.into()), Some(value.into()))
    }

    /// Add a bare boolean attribute such as `required`.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.with_attr(AttrName::Other(name.into()), None)
    }

    /// Rounded stroke presentation for outline icons.
    pub fn stroke(self, width: impl Into<String>) -> Self {
        self.with_attr(AttrName::StrokeLinecap, Some("round".to_string()))
            .with_attr(AttrName::StrokeLinejoin, Some("round".to_string()))
            .with_attr(AttrName::StrokeWidth, Some(width.into()))
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    /// Append a comment child.
    pub fn comment(self, content: impl Into<String>) -> Self {
        self.child(Node::Comment(content.into()))
    }

    /// Value of the class list, if set.
    pub fn classes(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == AttrName::Class)
            .and_then(|a| a.value.as_deref())
    }

    fn with_attr(mut self, name: AttrName, value: Option<String>) -> Self {
        self.attributes.push(Attribute { name, value });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_children() {
        let node: Node = element("ul")
            .class("space-y-2")
            .children(["one", "two"].map(|t| element("li").text(t)))
            .into();

        let Node::Element(ul) = &node else {
            panic!("expected element");
        };
        assert_eq!(ul.children.len(), 2);
        assert_eq!(ul.classes(), Some("space-y-2"));
        assert_eq!(node.text_content(), "onetwo");
    }

    #[test]
    fn test_class_appends() {
        let el = element("td").class("px-4 py-3").class("font-medium");
        assert_eq!(el.classes(), Some("px-4 py-3 font-medium"));
        assert_eq!(el.attributes.len(), 1);
    }

    #[test]
    fn test_void_tags() {
        assert!(element("input").is_void());
        assert!(element("path").is_void());
        assert!(!element("div").is_void());
    }

    #[test]
    fn test_stroke_sets_presentation_attributes() {
        let svg = element("svg").stroke("2");
        let names: Vec<_> = svg.attributes.iter().map(|a| a.name.clone()).collect();
        assert_eq!(
            names,
            vec![
                AttrName::StrokeLinecap,
                AttrName::StrokeLinejoin,
                AttrName::StrokeWidth
            ]
        );
    }

    #[test]
    fn test_walk_visits_comments() {
        let node: Node = element("div").comment("hero").text("hi").into();
        let mut comments = 0;
        node.walk(&mut |n| {
            if matches!(n, Node::Comment(_)) {
                comments += 1;
            }
        });
        assert_eq!(comments, 1);
    }
}
