//! Static export.
//!
//! Writes every navigation page and every lesson to `<out>/<route>/index.html`
//! so the site can be hosted from any static file server.

use std::path::{Path, PathBuf};

use lectern_content::Lesson;
use lectern_core::Result;
use lectern_core::util::files::{FindOptions, exists, find_all_files, read_file, write_file};
use lectern_core::util::paths::{lesson_route, route_to_output_path};

use crate::pages::{lesson_document, navigation_page};
use crate::state::SiteState;

/// A lesson file and the route it is served on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonFile {
    pub route: String,
    pub path: PathBuf,
}

/// What an export wrote.
#[derive(Clone, Debug, Default)]
pub struct ExportReport {
    /// Files written, in write order.
    pub pages: Vec<PathBuf>,
    /// Page routes skipped because they are malformed or their group is
    /// missing.
    pub skipped: Vec<String>,
}

impl ExportReport {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Find every servable lesson under the content directory.
///
/// Only `<block>/<lesson>.<ext>` files map onto the `/{block}/{lesson}`
/// route; files at other depths are ignored. A missing content directory
/// or an empty extension list yields no lessons, as it does when serving.
pub async fn discover_lessons(content_dir: &Path, extensions: &[String]) -> Result<Vec<LessonFile>> {
    if extensions.is_empty() {
        tracing::warn!("no page extensions configured; no lessons to export");
        return Ok(Vec::new());
    }
    if !exists(content_dir).await {
        tracing::warn!(path = %content_dir.display(), "content directory does not exist");
        return Ok(Vec::new());
    }

    let options = FindOptions::with_extensions(extensions.iter().cloned());
    let mut lessons: Vec<LessonFile> = Vec::new();
    for file in find_all_files(content_dir, options).await? {
        if file.relative_path.components().count() != 2 {
            tracing::debug!(path = %file.relative_path.display(), "not a lesson path");
            continue;
        }
        let Some(route) = lesson_route(&file.relative_path) else {
            continue;
        };
        // Extension order decides which file wins for a shared stem.
        if let Some(existing) = lessons.iter_mut().find(|l| l.route == route) {
            if ext_rank(&file.path, extensions) < ext_rank(&existing.path, extensions) {
                existing.path = file.path;
            }
            continue;
        }
        lessons.push(LessonFile {
            route,
            path: file.path,
        });
    }
    Ok(lessons)
}

fn ext_rank(path: &Path, extensions: &[String]) -> usize {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(|ext| extensions.iter().position(|e| e == ext))
        .unwrap_or(usize::MAX)
}

/// Render the whole site into `out_dir`.
pub async fn export_site(state: &SiteState, out_dir: &Path) -> Result<ExportReport> {
    let mut report = ExportReport::default();

    for page in state.registry().pages() {
        let target = match route_to_output_path(out_dir, &page.route) {
            Some(target) if page.is_well_formed() => target,
            _ => {
                tracing::warn!(route = %page.route, "skipping malformed page route");
                report.skipped.push(page.route.clone());
                continue;
            }
        };
        let html = match navigation_page(state, &page.route) {
            Ok(html) => html,
            Err(e) if e.is_not_found() => {
                tracing::warn!(route = %page.route, error = %e, "skipping page");
                report.skipped.push(page.route.clone());
                continue;
            }
            Err(e) => return Err(e),
        };
        write_file(&target, &html).await?;
        tracing::debug!(route = %page.route, path = %target.display(), "page written");
        report.pages.push(target);
    }

    for lesson in discover_lessons(state.content_dir(), state.extensions()).await? {
        let source = read_file(&lesson.path).await?;
        let parsed = Lesson::parse(lesson.route.as_str(), &source, state.renderer())?;
        let Some(target) = route_to_output_path(out_dir, &lesson.route) else {
            tracing::warn!(route = %lesson.route, "skipping lesson with unsafe route");
            continue;
        };
        write_file(&target, &lesson_document(state, parsed)).await?;
        tracing::debug!(route = %lesson.route, path = %target.display(), "lesson written");
        report.pages.push(target);
    }

    tracing::info!(
        pages = report.len(),
        skipped = report.skipped.len(),
        out = %out_dir.display(),
        "export complete"
    );
    Ok(report)
}
