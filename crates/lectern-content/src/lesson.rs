//! Parsed lesson documents.

use lectern_core::Result;

use crate::frontmatter::extract_frontmatter;
use crate::markdown::{MarkdownRenderer, Node};

/// A lesson ready to be placed in a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    /// Route the lesson is served on, e.g. `/block-one/git`.
    pub route: String,
    /// Frontmatter title, else the text of the first top-level `h1`.
    pub title: Option<String>,
    /// Frontmatter description.
    pub description: Option<String>,
    /// Rendered body.
    pub body: Node,
}

impl Lesson {
    /// Parse a lesson source and render its body.
    pub fn parse(
        route: impl Into<String>,
        source: &str,
        renderer: &MarkdownRenderer,
    ) -> Result<Self> {
        let (frontmatter, body_source) = extract_frontmatter(source)?;
        let frontmatter = frontmatter.unwrap_or_default();
        let body = renderer.render(body_source);
        let title = frontmatter.title.or_else(|| first_h1_text(&body));

        Ok(Self {
            route: route.into(),
            title,
            description: frontmatter.description,
            body,
        })
    }
}

fn first_h1_text(body: &Node) -> Option<String> {
    let Node::Fragment(nodes) = body else {
        return None;
    };
    nodes
        .iter()
        .filter_map(Node::as_element)
        .find(|el| el.tag() == "h1")
        .map(|el| Node::Fragment(el.children().to_vec()).text_content())
        .filter(|t| !t.trim().is_empty())
}
