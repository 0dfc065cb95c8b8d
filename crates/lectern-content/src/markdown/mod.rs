//! Markdown rendering through a per-element style map.
//!
//! - [`node`]: the displayable node tree and HTML serialisation
//! - [`kind`]: the closed set of element kinds and their style descriptors
//! - [`components`]: the render map (kind → render function) with fallback
//! - [`render`]: the Markdown event walker that drives the map

pub mod components;
pub mod kind;
pub mod node;
pub mod render;

pub use components::{ElementProps, RenderFn, RenderMap, default_render};
pub use kind::{ElementKind, StyleDescriptor, styles};
pub use node::{Element, Node};
pub use render::{MarkdownRenderer, RenderOptions};
