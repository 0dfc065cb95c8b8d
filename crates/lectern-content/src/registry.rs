//! Curriculum navigation registry.
//!
//! The registry is a read-only table of [`NavigationGroup`]s plus the
//! [`PageRoute`]s that bind a site route to a group. It is loaded once at
//! startup, either from the built-in table or from a TOML file, and is
//! never mutated afterwards.
//!
//! # File format
//!
//! ```toml
//! [[groups]]
//! id = "block_1"
//! entries = [
//!   { name = "Git", href = "/block-one/git" },
//! ]
//!
//! [[pages]]
//! route = "/block-one"
//! group = "block_1"
//! ```

use std::path::Path;

use lectern_core::util::files::read_file;
use lectern_core::util::paths::is_safe_segment;
use lectern_core::{Error, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_REGISTRY: &str = include_str!("../data/registry.toml");

// ============================================================================
// Types
// ============================================================================

/// One clickable destination: a display label and an absolute path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Display label, expected to be unique within its group.
    pub name: String,
    /// Target path.
    pub href: String,
}

impl NavigationEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// An ordered collection of entries under one curriculum block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGroup {
    /// Group identifier, e.g. `block_1`.
    pub id: String,
    /// Optional human title, used for the page `<title>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Entries in display order.
    #[serde(default)]
    pub entries: Vec<NavigationEntry>,
}

impl NavigationGroup {
    /// Create a group with no title.
    pub fn new(id: impl Into<String>, entries: Vec<NavigationEntry>) -> Self {
        Self {
            id: id.into(),
            title: None,
            entries,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Binds a site route to the group its navigation page lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRoute {
    /// Absolute route, e.g. `/block-one`.
    pub route: String,
    /// Group id rendered on this route.
    pub group: String,
}

impl PageRoute {
    /// Whether the route can be served and exported.
    ///
    /// The route must be absolute and every segment a plain name. Path
    /// parameter syntax (`{x}`, `*x`, `:x`), `.`/`..` and empty segments
    /// are rejected.
    pub fn is_well_formed(&self) -> bool {
        let Some(rest) = self.route.strip_prefix('/') else {
            return false;
        };
        rest.is_empty()
            || rest.split('/').all(|segment| {
                is_safe_segment(segment)
                    && !segment.starts_with(':')
                    && !segment.contains(['{', '}', '*'])
            })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegistryFile {
    groups: Vec<NavigationGroup>,
    pages: Vec<PageRoute>,
}

// ============================================================================
// ContentRegistry
// ============================================================================

/// Immutable table of navigation groups and page routes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentRegistry {
    groups: Vec<NavigationGroup>,
    pages: Vec<PageRoute>,
}

impl ContentRegistry {
    /// Build a registry from parts. Order is preserved as given.
    pub fn new(groups: Vec<NavigationGroup>, pages: Vec<PageRoute>) -> Self {
        Self { groups, pages }
    }

    /// The registry compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_REGISTRY)
    }

    /// Parse a registry from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: RegistryFile =
            toml::from_str(text).map_err(|e| Error::parse(format!("registry: {e}")))?;
        log::debug!(
            "registry parsed: {} groups, {} pages",
            file.groups.len(),
            file.pages.len()
        );
        Ok(Self::new(file.groups, file.pages))
    }

    /// Load a registry file.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = read_file(path).await?;
        Self::from_toml_str(&text)
            .map_err(|e| Error::parse(format!("{}: {e}", path.display())))
    }

    /// All groups in file order.
    pub fn groups(&self) -> &[NavigationGroup] {
        &self.groups
    }

    /// Look up a group by id.
    pub fn group(&self, id: &str) -> Option<&NavigationGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Entries of a group, if it exists.
    pub fn entries(&self, id: &str) -> Option<&[NavigationEntry]> {
        self.group(id).map(|g| g.entries.as_slice())
    }

    /// All page routes in file order.
    pub fn pages(&self) -> &[PageRoute] {
        &self.pages
    }

    /// The page bound to a route.
    pub fn page(&self, route: &str) -> Option<&PageRoute> {
        self.pages.iter().find(|p| p.route == route)
    }

    /// The group rendered on a route.
    pub fn group_for_route(&self, route: &str) -> Option<&NavigationGroup> {
        self.page(route).and_then(|p| self.group(&p.group))
    }
}

// ============================================================================
// Tests
// ============================================================================
