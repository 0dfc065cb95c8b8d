//! The HTML document shell.
//!
//! Every page body is wrapped in the same minimal document: language,
//! title and description metadata, an optional stylesheet, and a centred
//! `main` column.

use lectern_content::{Element, Node};

/// Classes on the `main` column.
pub const MAIN_CLASSES: &str = "max-w-[1280px] mx-auto";

/// Site-wide document metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    /// Default page title.
    pub title: String,
    /// Default page description.
    pub description: String,
    /// Value of `<html lang>`.
    pub lang: String,
    /// Stylesheet URL linked from every page.
    pub stylesheet: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Create Next App".to_string(),
            description: "Generated by create next app".to_string(),
            lang: "en".to_string(),
            stylesheet: None,
        }
    }
}

/// Per-page overrides for the document head.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Wrap `body` in a full HTML document.
pub fn render_document(site: &SiteMeta, page: &PageMeta, body: Node) -> String {
    let title = page.title.as_deref().unwrap_or(&site.title);
    let description = page.description.as_deref().unwrap_or(&site.description);

    let mut head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_child(Node::text(title)))
        .with_child(
            Element::new("meta")
                .with_attr("name", "description")
                .with_attr("content", description),
        );
    if let Some(href) = &site.stylesheet {
        head = head.with_child(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", href.as_str()),
        );
    }

    let html = Element::new("html")
        .with_attr("lang", site.lang.as_str())
        .with_child(head)
        .with_child(
            Element::new("body")
                .with_child(Element::new("main").with_class(MAIN_CLASSES).with_child(body)),
        );

    let mut out = String::from("<!DOCTYPE html>");
    Node::from(html).write_html(&mut out);
    out
}
