//! Alert system for displaying success and error messages to users.
//!
//! Alerts take the place of toast notifications: they are swapped into the
//! fixed alert container at the bottom of the page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

use crate::html::alert_container;

/// An alert message to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Success { message: String, details: String },
    SuccessSimple { message: String },
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (is_error, message, details) = match self {
            Alert::Success { message, details } => (false, message, details),
            Alert::SuccessSimple { message } => (false, message, String::new()),
            Alert::Error { message, details } => (true, message, details),
        };

        let style = if is_error {
            "border-red-500/60 bg-red-950/90 text-red-100"
        } else {
            "border-cyan-400/60 bg-gray-900/95 text-cyan-100"
        };

        html! {
            div
                role="alert"
                class={ "flex items-start justify-between gap-4 rounded-xl border p-4 shadow-lg " (style) }
            {
                div
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p class="text-sm opacity-80" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="text-lg leading-none opacity-70 hover:opacity-100"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        }
    }

    /// Render the alert inside an alert container marked for an out-of-band swap.
    pub fn into_oob_html(self) -> Markup {
        alert_container(Some(self.into_html()))
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        (StatusCode::OK, Html(self.into_html().into_string())).into_response()
    }
}
