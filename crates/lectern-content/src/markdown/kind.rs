//! Element kinds and their style descriptors.

use pulldown_cmark::HeadingLevel;

/// The closed set of Markdown element kinds that can carry a style rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    BlockQuote,
    InlineCode,
    CodeBlock,
    Link,
    Image,
    Table,
    TableHeaderCell,
    TableDataCell,
}

impl ElementKind {
    /// Number of kinds.
    pub const COUNT: usize = 18;

    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; Self::COUNT] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::Paragraph,
        Self::UnorderedList,
        Self::OrderedList,
        Self::ListItem,
        Self::BlockQuote,
        Self::InlineCode,
        Self::CodeBlock,
        Self::Link,
        Self::Image,
        Self::Table,
        Self::TableHeaderCell,
        Self::TableDataCell,
    ];

    /// Position in [`ElementKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// HTML tag used for this kind.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Paragraph => "p",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
            Self::ListItem => "li",
            Self::BlockQuote => "blockquote",
            Self::InlineCode => "code",
            Self::CodeBlock => "pre",
            Self::Link => "a",
            Self::Image => "img",
            Self::Table => "table",
            Self::TableHeaderCell => "th",
            Self::TableDataCell => "td",
        }
    }

    /// Kind for a tag name, the inverse of [`ElementKind::tag`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Kind for a heading level.
    pub const fn heading(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => Self::H1,
            HeadingLevel::H2 => Self::H2,
            HeadingLevel::H3 => Self::H3,
            HeadingLevel::H4 => Self::H4,
            HeadingLevel::H5 => Self::H5,
            HeadingLevel::H6 => Self::H6,
        }
    }
}

/// Fixed presentation attributes applied to every instance of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// Element tag.
    pub tag: &'static str,
    /// Utility classes (spacing, borders, breakpoint font sizes, colour).
    pub classes: &'static str,
}

impl StyleDescriptor {
    pub const fn new(tag: &'static str, classes: &'static str) -> Self {
        Self { tag, classes }
    }
}

pub mod styles {
    //! Style constants used by the default render map.

    use super::StyleDescriptor;

    pub const H1: StyleDescriptor = StyleDescriptor::new(
        "h1",
        "text-2xl font-bold mt-6 mb-3 border-b border-gray-300 lg:text-4xl",
    );
    pub const H2: StyleDescriptor = StyleDescriptor::new(
        "h2",
        "text-xl font-semibold mt-5 mb-2 border-b border-gray-200 lg:text-3xl",
    );
    pub const H3: StyleDescriptor =
        StyleDescriptor::new("h3", "text-lg font-semibold mt-4 mb-2 lg:text-2xl");
    pub const H4: StyleDescriptor =
        StyleDescriptor::new("h4", "text-lg font-semibold mt-3 mb-1 lg:text-xl");
    pub const H5: StyleDescriptor =
        StyleDescriptor::new("h5", "text-base font-semibold mt-2 mb-1 lg:text-lg");
    pub const PARAGRAPH: StyleDescriptor =
        StyleDescriptor::new("p", "text-sm leading-6 my-2 lg:text-base");
    pub const UNORDERED_LIST: StyleDescriptor = StyleDescriptor::new("ul", "list-disc pl-5 my-2");
    pub const ORDERED_LIST: StyleDescriptor = StyleDescriptor::new("ol", "list-decimal pl-5 my-2");
    pub const LIST_ITEM: StyleDescriptor =
        StyleDescriptor::new("li", "text-sm mb-1 lg:text-base");
    pub const BLOCK_QUOTE: StyleDescriptor =
        StyleDescriptor::new("blockquote", "border-l-4 border-gray-300 pl-4 italic my-4");
    pub const INLINE_CODE: StyleDescriptor = StyleDescriptor::new(
        "code",
        "bg-gray-100 border border-gray-300 rounded px-1 text-sm",
    );
    pub const CODE_BLOCK: StyleDescriptor = StyleDescriptor::new(
        "pre",
        "bg-gray-100 border border-gray-300 rounded p-2 overflow-x-auto my-4",
    );
    pub const LINK: StyleDescriptor = StyleDescriptor::new("a", "text-blue-600 hover:underline");
    pub const IMAGE: StyleDescriptor = StyleDescriptor::new("img", "max-w-full my-4");
    pub const TABLE: StyleDescriptor =
        StyleDescriptor::new("table", "border-collapse border border-gray-300 my-4");
    pub const TABLE_HEADER_CELL: StyleDescriptor = StyleDescriptor::new(
        "th",
        "border border-gray-300 bg-gray-100 px-2 py-1 text-left",
    );
    pub const TABLE_DATA_CELL: StyleDescriptor =
        StyleDescriptor::new("td", "border border-gray-300 px-2 py-1");
}
