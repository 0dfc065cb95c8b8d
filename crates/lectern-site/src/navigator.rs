//! The List Navigator.
//!
//! Renders a navigation group as a full-height, vertically centred column
//! of links. Each link carries the entry name as its `data-key`, which is
//! the rendering identity of the entry.

use lectern_content::{Element, NavigationEntry, Node};

/// Classes on the navigator container.
pub const CONTAINER_CLASSES: &str = "h-screen flex flex-col justify-center items-center gap-4 text-3xl";

/// Render a column of links, one per entry, in input order.
pub fn render_navigator(entries: &[NavigationEntry]) -> Node {
    Element::new("div")
        .with_class(CONTAINER_CLASSES)
        .with_children(entries.iter().map(render_link))
        .into()
}

fn render_link(entry: &NavigationEntry) -> Node {
    Element::new("a")
        .with_attr("data-key", entry.name.as_str())
        .with_attr("href", entry.href.as_str())
        .with_child(Node::text(entry.name.as_str()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(node: &Node) -> Vec<(String, String)> {
        node.as_element()
            .unwrap()
            .children()
            .iter()
            .map(|n| {
                let a = n.as_element().unwrap();
                assert_eq!(a.tag(), "a");
                (
                    Node::from(a.clone()).text_content(),
                    a.attr("href").unwrap().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_two_entries_in_order() {
        let entries = vec![
            NavigationEntry::new("Git", "/block-one/git"),
            NavigationEntry::new("HTML", "/block-one/html-basics"),
        ];
        let node = render_navigator(&entries);
        assert_eq!(
            links(&node),
            vec![
                ("Git".to_string(), "/block-one/git".to_string()),
                ("HTML".to_string(), "/block-one/html-basics".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_group_renders_empty_container() {
        let node = render_navigator(&[]);
        let el = node.as_element().unwrap();
        assert_eq!(el.tag(), "div");
        assert_eq!(el.class(), Some(CONTAINER_CLASSES));
        assert!(el.children().is_empty());
    }

    #[test]
    fn test_links_keyed_by_name() {
        let node = render_navigator(&[NavigationEntry::new("CSS Part 1", "/block-one/css-part-1")]);
        let a = node.as_element().unwrap().children()[0].as_element().cloned().unwrap();
        assert_eq!(a.attr("data-key"), Some("CSS Part 1"));
    }

    #[test]
    fn test_html_output() {
        let node = render_navigator(&[NavigationEntry::new("Q&A", "/q?a=1&b=2")]);
        assert_eq!(
            node.to_html(),
            format!(
                "<div class=\"{CONTAINER_CLASSES}\"><a data-key=\"Q&amp;A\" href=\"/q?a=1&amp;b=2\">Q&amp;A</a></div>"
            )
        );
    }

    #[test]
    fn test_deterministic() {
        let entries = vec![
            NavigationEntry::new("Block 1", "/block-one"),
            NavigationEntry::new("Block 2", "/block-two"),
        ];
        assert_eq!(render_navigator(&entries), render_navigator(&entries));
    }

    #[test]
    fn test_duplicate_names_are_rendered_as_given() {
        let entries = vec![
            NavigationEntry::new("Git", "/a"),
            NavigationEntry::new("Git", "/b"),
        ];
        assert_eq!(links(&render_navigator(&entries)).len(), 2);
    }
}
