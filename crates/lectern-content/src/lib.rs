//! Navigation registry, Markdown rendering, and lesson content.
//!
//! This crate holds everything the site needs that is not HTTP:
//!
//! - [`registry`]: navigation groups and page routes
//! - [`markdown`]: the per-element render map and the Markdown renderer
//! - [`frontmatter`]: YAML frontmatter extraction
//! - [`lesson`]: parsed lesson documents
//! - [`validation`]: advisory authoring checks

#![doc = include_str!("../README.md")]

pub mod frontmatter;
pub mod lesson;
pub mod markdown;
pub mod registry;
pub mod validation;

pub use lesson::Lesson;
pub use markdown::{
    Element, ElementKind, ElementProps, MarkdownRenderer, Node, RenderFn, RenderMap,
    RenderOptions, StyleDescriptor,
};
pub use registry::{ContentRegistry, NavigationEntry, NavigationGroup, PageRoute};
pub use validation::{ValidationIssue, ValidationResult, validate_registry};
