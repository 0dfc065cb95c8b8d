//! The render customisation map.
//!
//! [`RenderMap`] maps each [`ElementKind`] to an optional [`RenderFn`].
//! The renderer calls [`RenderMap::render`] once per element. When a kind has
//! a rule, the rule decides the output; otherwise the element is rendered
//! with [`default_render`], which keeps the tag and attributes but adds no
//! styling.
//!
//! Rules never inspect or rewrite content: children and the `href`, `src`
//! and `alt` attributes pass through exactly as given.

use super::kind::{ElementKind, StyleDescriptor, styles};
use super::node::{Element, Node};

/// Inputs handed to a render function.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementProps {
    /// Already-rendered children.
    pub children: Vec<Node>,
    /// Link target (links only).
    pub href: Option<String>,
    /// Image source (images only).
    pub src: Option<String>,
    /// Image alternative text (images only).
    pub alt: Option<String>,
}

impl ElementProps {
    /// Props carrying only children.
    pub fn children(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    /// Props for a link.
    pub fn link(href: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            children,
            href: Some(href.into()),
            ..Default::default()
        }
    }

    /// Props for an image.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            alt: Some(alt.into()),
            ..Default::default()
        }
    }
}

/// A rendering strategy for one element kind.
pub type RenderFn = fn(ElementProps) -> Node;

/// Fixed-size table of render rules indexed by [`ElementKind`].
#[derive(Clone, Copy)]
pub struct RenderMap {
    rules: [Option<RenderFn>; ElementKind::COUNT],
}

impl std::fmt::Debug for RenderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mapped: Vec<ElementKind> = ElementKind::ALL
            .into_iter()
            .filter(|k| self.is_mapped(*k))
            .collect();
        f.debug_struct("RenderMap").field("mapped", &mapped).finish()
    }
}

impl Default for RenderMap {
    fn default() -> Self {
        Self::styled()
    }
}

impl RenderMap {
    /// A map with no rules; every element renders unstyled.
    pub const fn empty() -> Self {
        Self {
            rules: [None; ElementKind::COUNT],
        }
    }

    /// The site's default styling for lesson content.
    ///
    /// Every kind has a rule except [`ElementKind::H6`].
    pub const fn styled() -> Self {
        Self::empty()
            .with_rule(ElementKind::H1, h1)
            .with_rule(ElementKind::H2, h2)
            .with_rule(ElementKind::H3, h3)
            .with_rule(ElementKind::H4, h4)
            .with_rule(ElementKind::H5, h5)
            .with_rule(ElementKind::Paragraph, paragraph)
            .with_rule(ElementKind::UnorderedList, unordered_list)
            .with_rule(ElementKind::OrderedList, ordered_list)
            .with_rule(ElementKind::ListItem, list_item)
            .with_rule(ElementKind::BlockQuote, block_quote)
            .with_rule(ElementKind::InlineCode, inline_code)
            .with_rule(ElementKind::CodeBlock, code_block)
            .with_rule(ElementKind::Link, link)
            .with_rule(ElementKind::Image, image)
            .with_rule(ElementKind::Table, table)
            .with_rule(ElementKind::TableHeaderCell, table_header_cell)
            .with_rule(ElementKind::TableDataCell, table_data_cell)
    }

    /// Set the rule for one kind.
    pub const fn with_rule(mut self, kind: ElementKind, rule: RenderFn) -> Self {
        self.rules[kind.index()] = Some(rule);
        self
    }

    /// Remove the rule for one kind so it falls back to the default.
    pub const fn without_rule(mut self, kind: ElementKind) -> Self {
        self.rules[kind.index()] = None;
        self
    }

    /// Overlay `overrides` on this map. Rules present in `overrides` win.
    pub fn merge(mut self, overrides: &RenderMap) -> Self {
        for kind in ElementKind::ALL {
            if let Some(rule) = overrides.get(kind) {
                self.rules[kind.index()] = Some(rule);
            }
        }
        self
    }

    /// The rule for a kind, if one is set.
    pub fn get(&self, kind: ElementKind) -> Option<RenderFn> {
        self.rules[kind.index()]
    }

    /// Whether a kind has a rule.
    pub fn is_mapped(&self, kind: ElementKind) -> bool {
        self.get(kind).is_some()
    }

    /// Render one element, falling back to [`default_render`] when unmapped.
    pub fn render(&self, kind: ElementKind, props: ElementProps) -> Node {
        match self.get(kind) {
            Some(rule) => rule(props),
            None => default_render(kind, props),
        }
    }
}

// ============================================================================
// Fallback
// ============================================================================

/// Unstyled rendering: the kind's tag, forwarded attributes, children as-is.
pub fn default_render(kind: ElementKind, props: ElementProps) -> Node {
    let el = Element::new(kind.tag());
    match kind {
        ElementKind::Link => el
            .with_opt_attr("href", props.href)
            .with_children(props.children)
            .into(),
        ElementKind::Image => el
            .with_opt_attr("src", props.src)
            .with_opt_attr("alt", props.alt)
            .into(),
        _ => el.with_children(props.children).into(),
    }
}

// ============================================================================
// Default rules
// ============================================================================

fn wrap(style: StyleDescriptor, children: Vec<Node>) -> Node {
    Element::new(style.tag)
        .with_class(style.classes)
        .with_children(children)
        .into()
}

fn h1(props: ElementProps) -> Node {
    wrap(styles::H1, props.children)
}

fn h2(props: ElementProps) -> Node {
    wrap(styles::H2, props.children)
}

fn h3(props: ElementProps) -> Node {
    wrap(styles::H3, props.children)
}

fn h4(props: ElementProps) -> Node {
    wrap(styles::H4, props.children)
}

fn h5(props: ElementProps) -> Node {
    wrap(styles::H5, props.children)
}

fn paragraph(props: ElementProps) -> Node {
    wrap(styles::PARAGRAPH, props.children)
}

fn unordered_list(props: ElementProps) -> Node {
    wrap(styles::UNORDERED_LIST, props.children)
}

fn ordered_list(props: ElementProps) -> Node {
    wrap(styles::ORDERED_LIST, props.children)
}

fn list_item(props: ElementProps) -> Node {
    wrap(styles::LIST_ITEM, props.children)
}

fn block_quote(props: ElementProps) -> Node {
    wrap(styles::BLOCK_QUOTE, props.children)
}

fn inline_code(props: ElementProps) -> Node {
    wrap(styles::INLINE_CODE, props.children)
}

fn code_block(props: ElementProps) -> Node {
    wrap(styles::CODE_BLOCK, props.children)
}

fn link(props: ElementProps) -> Node {
    Element::new(styles::LINK.tag)
        .with_opt_attr("href", props.href)
        .with_class(styles::LINK.classes)
        .with_children(props.children)
        .into()
}

fn image(props: ElementProps) -> Node {
    Element::new(styles::IMAGE.tag)
        .with_opt_attr("src", props.src)
        .with_opt_attr("alt", props.alt)
        .with_class(styles::IMAGE.classes)
        .into()
}

fn table(props: ElementProps) -> Node {
    wrap(styles::TABLE, props.children)
}

fn table_header_cell(props: ElementProps) -> Node {
    wrap(styles::TABLE_HEADER_CELL, props.children)
}

fn table_data_cell(props: ElementProps) -> Node {
    wrap(styles::TABLE_DATA_CELL, props.children)
}

// ============================================================================
// Tests
// ============================================================================
