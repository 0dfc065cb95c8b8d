//! Markdown → node tree rendering.
//!
//! Walks the `pulldown-cmark` event stream, builds children bottom-up, and
//! hands each finished element to the [`RenderMap`]. Elements outside the
//! closed [`ElementKind`] set (emphasis, strong, rules, table sections) are
//! emitted as plain tags.

use pulldown_cmark::{Event, Options, Parser, Tag};

use super::components::{ElementProps, RenderMap};
use super::kind::ElementKind;
use super::node::{Element, Node};

/// Parser options for lesson Markdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Enable GitHub-flavoured extensions: tables, strikethrough, task lists.
    pub gfm: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { gfm: true }
    }
}

impl RenderOptions {
    fn parser_options(self) -> Options {
        let mut options = Options::empty();
        if self.gfm {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
        }
        options
    }
}

/// Renders Markdown documents through a [`RenderMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownRenderer {
    map: RenderMap,
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a renderer using `map` and default options.
    pub fn new(map: RenderMap) -> Self {
        Self {
            map,
            options: RenderOptions::default(),
        }
    }

    /// Replace the parser options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// The render map in use.
    pub fn map(&self) -> &RenderMap {
        &self.map
    }

    /// Render a document to a fragment of top-level nodes.
    pub fn render(&self, source: &str) -> Node {
        let parser = Parser::new_ext(source, self.options.parser_options());
        let mut builder = TreeBuilder::new(&self.map);
        for event in parser {
            builder.event(event);
        }
        Node::Fragment(builder.finish())
    }

    /// Render a document straight to HTML.
    pub fn render_html(&self, source: &str) -> String {
        self.render(source).to_html()
    }
}

// ============================================================================
// Tree builder
// ============================================================================

enum Open {
    Root,
    Kind(ElementKind),
    Link { href: String },
    Image { src: String },
    CodeBlock,
    Table,
    TableHead,
    TableRow,
    TableCell,
    Plain(&'static str),
    Transparent,
}

struct Frame {
    open: Open,
    children: Vec<Node>,
}

struct TreeBuilder<'m> {
    map: &'m RenderMap,
    stack: Vec<Frame>,
    in_table_head: bool,
}

impl<'m> TreeBuilder<'m> {
    fn new(map: &'m RenderMap) -> Self {
        Self {
            map,
            stack: vec![Frame {
                open: Open::Root,
                children: Vec::new(),
            }],
            in_table_head: false,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(text) => self.push(Node::text(text.into_string())),
            Event::Code(code) => {
                let node = self.map.render(
                    ElementKind::InlineCode,
                    ElementProps::children(vec![Node::text(code.into_string())]),
                );
                self.push(node);
            }
            Event::Html(html) | Event::InlineHtml(html) => self.push(Node::Raw(html.into_string())),
            Event::SoftBreak => self.push(Node::text("\n")),
            Event::HardBreak => self.push(Element::new("br").into()),
            Event::Rule => self.push(Element::new("hr").into()),
            Event::TaskListMarker(checked) => {
                let input = Element::new("input")
                    .with_attr("type", "checkbox")
                    .with_attr("disabled", "");
                let input = if checked {
                    input.with_attr("checked", "")
                } else {
                    input
                };
                self.push(input.into());
            }
            Event::FootnoteReference(label) => {
                self.push(
                    Element::new("sup")
                        .with_child(Node::text(label.into_string()))
                        .into(),
                );
            }
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                self.push(Node::text(math.into_string()));
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let open = match tag {
            Tag::Paragraph => Open::Kind(ElementKind::Paragraph),
            Tag::Heading { level, .. } => Open::Kind(ElementKind::heading(level)),
            Tag::BlockQuote(_) => Open::Kind(ElementKind::BlockQuote),
            Tag::CodeBlock(_) => Open::CodeBlock,
            Tag::List(Some(_)) => Open::Kind(ElementKind::OrderedList),
            Tag::List(None) => Open::Kind(ElementKind::UnorderedList),
            Tag::Item => Open::Kind(ElementKind::ListItem),
            Tag::Table(_) => Open::Table,
            Tag::TableHead => {
                self.in_table_head = true;
                Open::TableHead
            }
            Tag::TableRow => Open::TableRow,
            Tag::TableCell => Open::TableCell,
            Tag::Emphasis => Open::Plain("em"),
            Tag::Strong => Open::Plain("strong"),
            Tag::Strikethrough => Open::Plain("del"),
            Tag::Link { dest_url, .. } => Open::Link {
                href: dest_url.into_string(),
            },
            Tag::Image { dest_url, .. } => Open::Image {
                src: dest_url.into_string(),
            },
            // HTML blocks, footnote definitions and extension-only blocks
            // contribute their children without a wrapper.
            _ => Open::Transparent,
        };
        self.stack.push(Frame {
            open,
            children: Vec::new(),
        });
    }

    fn end(&mut self) {
        // The root frame is never closed by the parser.
        if self.stack.len() <= 1 {
            log::warn!("unbalanced markdown end event ignored");
            return;
        }
        let Some(Frame { open, children }) = self.stack.pop() else {
            return;
        };

        let node = match open {
            Open::Root => return,
            Open::Kind(kind) => self.map.render(kind, ElementProps::children(children)),
            Open::Link { href } => self
                .map
                .render(ElementKind::Link, ElementProps::link(href, children)),
            Open::Image { src } => {
                let alt = Node::Fragment(children).text_content();
                self.map
                    .render(ElementKind::Image, ElementProps::image(src, alt))
            }
            Open::CodeBlock => {
                let code = self
                    .map
                    .render(ElementKind::InlineCode, ElementProps::children(children));
                self.map
                    .render(ElementKind::CodeBlock, ElementProps::children(vec![code]))
            }
            Open::Table => self
                .map
                .render(ElementKind::Table, ElementProps::children(table_sections(children))),
            Open::TableHead => {
                self.in_table_head = false;
                Element::new("thead")
                    .with_child(Element::new("tr").with_children(children))
                    .into()
            }
            Open::TableRow => Element::new("tr").with_children(children).into(),
            Open::TableCell => {
                let kind = if self.in_table_head {
                    ElementKind::TableHeaderCell
                } else {
                    ElementKind::TableDataCell
                };
                self.map.render(kind, ElementProps::children(children))
            }
            Open::Plain(tag) => Element::new(tag).with_children(children).into(),
            Open::Transparent => {
                for child in children {
                    self.push(child);
                }
                return;
            }
        };
        self.push(node);
    }

    fn push(&mut self, node: Node) {
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(node);
        }
    }

    fn finish(mut self) -> Vec<Node> {
        // Fold any unclosed frames (should not happen with a well-formed
        // event stream) into the root.
        while self.stack.len() > 1 {
            self.end();
        }
        self.stack.pop().map(|f| f.children).unwrap_or_default()
    }
}

/// Split table children into `thead` followed by a `tbody` of body rows.
fn table_sections(children: Vec<Node>) -> Vec<Node> {
    let (head, rows): (Vec<Node>, Vec<Node>) = children
        .into_iter()
        .partition(|n| n.as_element().is_some_and(|el| el.tag() == "thead"));
    let mut sections = head;
    if !rows.is_empty() {
        sections.push(Element::new("tbody").with_children(rows).into());
    }
    sections
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::kind::styles;

    fn render(source: &str) -> Node {
        MarkdownRenderer::default().render(source)
    }

    fn top_level(source: &str) -> Vec<Node> {
        match render(source) {
            Node::Fragment(nodes) => nodes,
            other => vec![other],
        }
    }

    fn first_element(source: &str) -> Element {
        top_level(source)
            .into_iter()
            .find_map(|n| n.as_element().cloned())
            .unwrap()
    }

    #[test]
    fn test_heading_two_overview() {
        let el = first_element("## Overview\n");
        assert_eq!(el.tag(), "h2");
        assert_eq!(el.class(), Some(styles::H2.classes));
        assert_eq!(el.children(), &[Node::text("Overview")]);
    }

    #[test]
    fn test_all_heading_levels() {
        let nodes = top_level("# a\n## b\n### c\n#### d\n##### e\n###### f\n");
        let tags: Vec<&str> = nodes
            .iter()
            .filter_map(|n| n.as_element().map(|e| e.tag()))
            .collect();
        assert_eq!(tags, vec!["h1", "h2", "h3", "h4", "h5", "h6"]);
        // h6 has no rule and renders unstyled.
        assert_eq!(nodes[5].as_element().unwrap().class(), None);
    }

    #[test]
    fn test_paragraph_with_inline_code_and_emphasis() {
        let html = MarkdownRenderer::default().render_html("Run `git init` *now*.");
        assert_eq!(
            html,
            format!(
                "<p class=\"{}\">Run <code class=\"{}\">git init</code> <em>now</em>.</p>",
                styles::PARAGRAPH.classes,
                styles::INLINE_CODE.classes
            )
        );
    }

    #[test]
    fn test_link_href_verbatim() {
        let el = first_element("[MDN](https://developer.mozilla.org/en-US/?a=1&b=2)");
        let link = el.children()[0].as_element().unwrap();
        assert_eq!(link.tag(), "a");
        assert_eq!(
            link.attr("href"),
            Some("https://developer.mozilla.org/en-US/?a=1&b=2")
        );
        assert_eq!(link.children(), &[Node::text("MDN")]);
    }

    #[test]
    fn test_image_src_and_alt() {
        let el = first_element("![The *box* model](/img/box.png)");
        let img = el.children()[0].as_element().unwrap();
        assert_eq!(img.tag(), "img");
        assert_eq!(img.attr("src"), Some("/img/box.png"));
        assert_eq!(img.attr("alt"), Some("The box model"));
        assert_eq!(img.class(), Some(styles::IMAGE.classes));
    }

    #[test]
    fn test_lists() {
        let ul = first_element("- one\n- two\n");
        assert_eq!(ul.tag(), "ul");
        assert_eq!(ul.class(), Some(styles::UNORDERED_LIST.classes));
        assert_eq!(ul.children().len(), 2);
        let li = ul.children()[0].as_element().unwrap();
        assert_eq!(li.class(), Some(styles::LIST_ITEM.classes));

        let ol = first_element("3. three\n4. four\n");
        assert_eq!(ol.tag(), "ol");
        assert_eq!(ol.attr("start"), None);
    }

    #[test]
    fn test_blockquote() {
        let bq = first_element("> Quote me\n");
        assert_eq!(bq.tag(), "blockquote");
        assert_eq!(bq.class(), Some(styles::BLOCK_QUOTE.classes));
        assert_eq!(bq.children()[0].as_element().unwrap().tag(), "p");
    }

    #[test]
    fn test_code_block_wraps_code() {
        let pre = first_element("```js\nlet a = 1 < 2;\n```\n");
        assert_eq!(pre.tag(), "pre");
        assert_eq!(pre.class(), Some(styles::CODE_BLOCK.classes));
        let code = pre.children()[0].as_element().unwrap();
        assert_eq!(code.tag(), "code");
        assert_eq!(Node::from(code.clone()).text_content(), "let a = 1 < 2;\n");
        assert!(
            Node::from(pre)
                .to_html()
                .contains("let a = 1 &lt; 2;")
        );
    }

    #[test]
    fn test_table_structure() {
        let table = first_element("| Tag | Use |\n|---|---|\n| `a` | link |\n| img | image |\n");
        assert_eq!(table.tag(), "table");
        assert_eq!(table.class(), Some(styles::TABLE.classes));

        let sections: Vec<&str> = table
            .children()
            .iter()
            .map(|n| n.as_element().unwrap().tag())
            .collect();
        assert_eq!(sections, vec!["thead", "tbody"]);

        let html = Node::from(table).to_html();
        assert_eq!(html.matches("<th class=").count(), 2);
        assert_eq!(html.matches("<td class=").count(), 4);
        assert!(html.contains(styles::TABLE_HEADER_CELL.classes));
        assert!(html.contains(styles::TABLE_DATA_CELL.classes));
    }

    #[test]
    fn test_table_disabled_without_gfm() {
        let renderer =
            MarkdownRenderer::default().with_options(RenderOptions { gfm: false });
        let html = renderer.render_html("| a |\n|---|\n| b |\n");
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_raw_html_passthrough() {
        let html = MarkdownRenderer::default().render_html("<div class=\"note\">hi</div>\n");
        assert!(html.contains("<div class=\"note\">hi</div>"));
    }

    #[test]
    fn test_empty_map_renders_unstyled() {
        let html = MarkdownRenderer::new(RenderMap::empty()).render_html("# Title\n\ntext");
        assert_eq!(html, "<h1>Title</h1><p>text</p>");
    }

    #[test]
    fn test_render_is_idempotent() {
        let source = "# Git\n\nSome `code` and a [link](/x).\n\n| a |\n|---|\n| b |\n";
        assert_eq!(render(source), render(source));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render(""), Node::Fragment(vec![]));
    }
}
