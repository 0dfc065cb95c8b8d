//! Path helpers.
//!
//! Covers tilde expansion for configured directories and the mapping
//! between site routes and files on disk.

use std::path::{Component, Path, PathBuf};

/// Expands `~` to the user's home directory.
///
/// If the path starts with `~`, replaces it with the user's home directory.
/// Otherwise returns the path unchanged.
///
/// # Example
///
/// ```
/// use lectern_core::util::paths::expand_tilde;
///
/// let expanded = expand_tilde("~/course");
/// assert!(!expanded.starts_with("~"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

/// Output file for a route in a static export.
///
/// `/` maps to `<out>/index.html`, `/block-one/git` maps to
/// `<out>/block-one/git/index.html`. Returns `None` when a segment could
/// leave `out_dir`.
pub fn route_to_output_path(out_dir: &Path, route: &str) -> Option<PathBuf> {
    let mut path = out_dir.to_path_buf();
    for segment in route.split('/').filter(|s| !s.is_empty()) {
        if !is_safe_segment(segment) {
            return None;
        }
        path.push(segment);
    }
    Some(path.join("index.html"))
}

/// Route for a lesson file given its path relative to the content root.
///
/// `block-one/git.md` maps to `/block-one/git`. Returns `None` for paths
/// that escape the content root or have no file stem.
pub fn lesson_route(relative_path: &Path) -> Option<String> {
    let stem = relative_path.file_stem()?.to_str()?;
    let mut segments = Vec::new();
    if let Some(parent) = relative_path.parent() {
        for component in parent.components() {
            match component {
                Component::Normal(s) => segments.push(s.to_str()?.to_string()),
                Component::CurDir => {}
                _ => return None,
            }
        }
    }
    segments.push(stem.to_string());
    Some(format!("/{}", segments.join("/")))
}

/// Whether a route segment is safe to join onto a directory.
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}
