//! Full page responses for requests that cannot be served: unknown routes and server faults.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// An error page with a short explanation and a suggested fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub description: &'static str,
    pub fix: &'static str,
}

impl ErrorPage {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Page not found.",
            fix: "Check the address or go back to the home page.",
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description: "Sorry, something went wrong.",
            fix: "Your account has not changed. Try again later or check the server logs.",
        }
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let title = self.status.canonical_reason().unwrap_or("Error");
        let page = error_view(title, self.status.as_str(), self.description, self.fix);

        (self.status, Html(page.into_string())).into_response()
    }
}

/// The fallback for routes that do not exist.
pub async fn get_404_not_found() -> ErrorPage {
    ErrorPage::not_found()
}

/// The page htmx requests are sent to after an internal error.
pub async fn get_internal_server_error_page() -> ErrorPage {
    ErrorPage::internal_error()
}
