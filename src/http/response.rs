//! Page to HTTP response mapping.
//!
//! - Matched route → 200 with the rendered document
//! - Unmatched, render policy → 404 with the not-found document
//! - Unmatched, redirect policy → 302 to the root route

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::app::Page;

/// Label used for metrics and logs.
pub fn page_label(page: &Page) -> &'static str {
    match page {
        Page::View { view, .. } => view.as_str(),
        Page::NotFound { .. } => "NotFound",
        Page::Redirect { .. } => "Redirect",
    }
}

pub fn page_status(page: &Page) -> StatusCode {
    match page {
        Page::View { .. } => StatusCode::OK,
        Page::NotFound { .. } => StatusCode::NOT_FOUND,
        Page::Redirect { .. } => StatusCode::FOUND,
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let status = page_status(&self);
        match self {
            Page::View { html, .. } | Page::NotFound { html, .. } => (status, Html(html)).into_response(),
            Page::Redirect { location } => (status, [(header::LOCATION, location)]).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::ViewId;

    #[test]
    fn test_statuses() {
        let view = Page::View {
            view: ViewId::Main,
            html: String::new(),
        };
        assert_eq!(page_status(&view), StatusCode::OK);
        assert_eq!(page_label(&view), "Main");

        let redirect = Page::Redirect {
            location: "/wallet/".into(),
        };
        let response = redirect.into_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/wallet/");
    }

    #[test]
    fn test_not_found_is_html() {
        let response = Page::NotFound {
            path: "/x".into(),
            html: "<p>gone</p>".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }
}
