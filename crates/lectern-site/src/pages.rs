//! Page assembly shared by the server and the static exporter.

use lectern_content::Lesson;
use lectern_core::util::files::{find_lesson_file, read_file};
use lectern_core::util::paths::is_safe_segment;
use lectern_core::{Error, Result};

use crate::document::{PageMeta, render_document};
use crate::navigator::render_navigator;
use crate::state::SiteState;

/// Render the navigation page bound to `route`.
///
/// # Errors
///
/// [`Error::NotFound`] if no page is bound to the route, or if the page
/// names a group the registry does not have.
pub fn navigation_page(state: &SiteState, route: &str) -> Result<String> {
    let registry = state.registry();
    let page = registry
        .page(route)
        .ok_or_else(|| Error::not_found(format!("no page for route '{route}'")))?;
    let group = registry.group(&page.group).ok_or_else(|| {
        tracing::warn!(route, group = %page.group, "page bound to unknown group");
        Error::not_found(format!("group '{}' for route '{route}'", page.group))
    })?;

    let meta = PageMeta {
        title: group.title.clone(),
        description: None,
    };
    Ok(render_document(
        state.meta(),
        &meta,
        render_navigator(&group.entries),
    ))
}

/// Load, parse and render the lesson at `/{block}/{lesson}`.
pub async fn lesson_page(state: &SiteState, block: &str, lesson: &str) -> Result<String> {
    if !is_safe_segment(block) || !is_safe_segment(lesson) {
        return Err(Error::not_found(format!("invalid lesson path '{block}/{lesson}'")));
    }
    let path = find_lesson_file(state.content_dir(), block, lesson, state.extensions()).await?;
    let source = read_file(&path).await?;
    let lesson = Lesson::parse(format!("/{block}/{lesson}"), &source, state.renderer())?;
    tracing::debug!(route = %lesson.route, path = %path.display(), "lesson rendered");
    Ok(lesson_document(state, lesson))
}

/// Wrap a parsed lesson in the document shell.
pub fn lesson_document(state: &SiteState, lesson: Lesson) -> String {
    let meta = PageMeta {
        title: lesson.title,
        description: lesson.description,
    };
    render_document(state.meta(), &meta, lesson.body)
}
