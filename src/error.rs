//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;

use crate::{alert::Alert, error_page::ErrorPage, html::format_currency};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required text field, e.g. the transfer recipient or goal name, was blank.
    ///
    /// The string is the name of the field.
    #[error("{0} cannot be empty")]
    MissingField(&'static str),

    /// The text entered for an amount was not a number, was zero or negative,
    /// or had more than two decimal places.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// A transfer asked for more money than the account holds.
    #[error("cannot transfer {requested} when only {available} is available")]
    InsufficientFunds {
        /// The amount the user tried to send.
        requested: Decimal,
        /// The balance at the time of the transfer.
        available: Decimal,
    },

    /// A form post was missing a field or had a value that could not be read,
    /// e.g. an unknown tab.
    ///
    /// The string is the reason given by the form extractor. It is logged,
    /// not shown to the user.
    #[error("could not read the form: {0}")]
    InvalidForm(String),

    /// Could not acquire the ledger lock
    #[error("could not acquire the ledger lock")]
    LedgerLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::LedgerLockError => ErrorPage::internal_error().into_response(),
            // Validation errors are reported with alerts, so any that reach here are unexpected.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::internal_error().into_response()
            }
        }
    }
}

impl From<FormRejection> for Error {
    fn from(rejection: FormRejection) -> Self {
        Error::InvalidForm(rejection.body_text())
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingField(field) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Check the form".to_owned(),
                    details: format!("The {field} cannot be empty."),
                },
            ),
            Error::InvalidAmount(text) if text.is_empty() => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: "Enter an amount greater than zero.".to_owned(),
                },
            ),
            Error::InvalidAmount(text) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "\"{text}\" is not a valid amount. \
                        Enter a number greater than zero with at most two decimal places."
                    ),
                },
            ),
            Error::InsufficientFunds {
                requested,
                available,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Insufficient funds".to_owned(),
                    details: format!(
                        "Cannot transfer {}, only {} is available.",
                        format_currency(requested),
                        format_currency(available)
                    ),
                },
            ),
            Error::InvalidForm(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Check the form".to_owned(),
                    details: "The form could not be read, reload the page and try again."
                        .to_owned(),
                },
            ),
            Error::LedgerLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod alert_response_tests {
    use axum::http::StatusCode;
    use rust_decimal::Decimal;

    use crate::{
        Error,
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    #[tokio::test]
    async fn validation_errors_are_unprocessable() {
        let errors = [
            Error::MissingField("recipient"),
            Error::InvalidAmount("abc".to_owned()),
            Error::InvalidAmount("".to_owned()),
            Error::InvalidForm("missing field `amount`".to_owned()),
            Error::InsufficientFunds {
                requested: Decimal::from(10),
                available: Decimal::from(5),
            },
        ];

        for error in errors {
            let response = error.into_alert_response();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
            let html = parse_html_fragment(response).await;
            assert_valid_html(&html);
        }
    }

    #[tokio::test]
    async fn invalid_form_hides_extractor_message() {
        let response =
            Error::InvalidForm("Failed to deserialize form body: tab: unknown variant".to_owned())
                .into_alert_response();

        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Check the form"));
        assert!(!text.contains("Failed to deserialize"));
    }

    #[tokio::test]
    async fn lock_error_is_internal_server_error() {
        let response = Error::LedgerLockError.into_alert_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
