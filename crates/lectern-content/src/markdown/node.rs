//! Displayable node tree and HTML serialisation.
//!
//! Render functions produce [`Node`]s rather than strings so that callers
//! (and tests) can inspect structure: tag, classes, attributes, children.
//! Serialisation to HTML happens once, at the edge.

use std::fmt::Write as _;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "meta", "link"];

/// A rendered node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Pre-rendered HTML, emitted verbatim.
    Raw(String),
    /// A sequence of nodes with no wrapper.
    Fragment(Vec<Node>),
}

impl Node {
    /// Text node.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(s),
            Self::Raw(_) => {}
            Self::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Self::Fragment(nodes) => nodes.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Serialise to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Append HTML for this node to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(s) => escape_text(s, out),
            Self::Raw(s) => out.push_str(s),
            Self::Fragment(nodes) => nodes.iter().for_each(|n| n.write_html(out)),
            Self::Element(el) => el.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An HTML element. Attribute order is insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set an attribute when a value is present.
    pub fn with_opt_attr(self, name: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(v) => self.with_attr(name, v),
            None => self,
        }
    }

    /// Set the `class` attribute.
    pub fn with_class(self, classes: impl Into<String>) -> Self {
        self.with_attr("class", classes)
    }

    /// Append one child.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `class` attribute.
    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    /// All attributes in order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"");
            escape_attr(value, out);
            out.push('"');
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text content for HTML.
pub fn escape_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
