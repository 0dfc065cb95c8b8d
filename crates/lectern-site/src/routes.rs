//! The axum router.
//!
//! One GET route per registry page, one `/{block}/{lesson}` route for
//! lessons, and a 404 fallback.

use std::collections::HashSet;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;

use crate::error::{SiteError, error_page};
use crate::pages::{lesson_page, navigation_page};
use crate::state::SiteState;

/// Build the site router.
pub fn router(state: SiteState) -> Router {
    let mut router = Router::new();
    let mut registered = HashSet::new();

    for page in state.registry().pages() {
        // axum panics on malformed or repeated paths; skip them instead.
        if !page.is_well_formed() {
            tracing::warn!(route = %page.route, "skipping malformed page route");
            continue;
        }
        if !registered.insert(page.route.clone()) {
            tracing::warn!(route = %page.route, "skipping duplicate page route");
            continue;
        }
        let route = page.route.clone();
        tracing::debug!(route = %route, group = %page.group, "registering page");
        router = router.route(
            &page.route,
            get(move |State(state): State<SiteState>| {
                let route = route.clone();
                async move { navigation_page(&state, &route).map(Html).map_err(SiteError) }
            }),
        );
    }

    router
        .route("/{block}/{lesson}", get(lesson_handler))
        .fallback(not_found)
        .with_state(state)
}

async fn lesson_handler(
    State(state): State<SiteState>,
    Path((block, lesson)): Path<(String, String)>,
) -> Result<Html<String>, SiteError> {
    Ok(Html(lesson_page(&state, &block, &lesson).await?))
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(error_page(StatusCode::NOT_FOUND)))
}
