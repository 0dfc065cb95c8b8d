//! HTTP mapping for Lectern errors.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use lectern_content::{Element, Node};

use crate::navigator::CONTAINER_CLASSES;

/// A [`lectern_core::Error`] that can be returned from a handler.
#[derive(Debug)]
pub struct SiteError(pub lectern_core::Error);

impl SiteError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<lectern_core::Error> for SiteError {
    fn from(err: lectern_core::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(error = %self.0, "page not found");
        } else {
            tracing::error!(error = %self.0, "page render failed");
        }
        (status, Html(error_page(status))).into_response()
    }
}

/// A bare status page. Error details stay in the log.
pub fn error_page(status: StatusCode) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = Element::new("div")
        .with_class(CONTAINER_CLASSES)
        .with_child(Element::new("h1").with_child(Node::text(heading.as_str())))
        .with_child(Element::new("a").with_attr("href", "/").with_child(Node::text("Home")));
    let mut out = String::from("<!DOCTYPE html>");
    Node::from(
        Element::new("html")
            .with_child(Element::new("head").with_child(
                Element::new("title").with_child(Node::text(heading)),
            ))
            .with_child(Element::new("body").with_child(body)),
    )
    .write_html(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_core::Error;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            SiteError(Error::not_found("x")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SiteError(Error::parse("bad")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_page_hides_details() {
        let page = error_page(StatusCode::NOT_FOUND);
        assert!(page.contains("404 Not Found"));
        assert!(page.contains("href=\"/\""));
    }

    #[test]
    fn test_into_response_status() {
        let resp = SiteError(Error::config("boom")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
