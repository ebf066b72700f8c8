//! The transfer modal and the endpoint it posts to.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Response,
};
use maud::{Markup, html};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    app_state::LedgerState,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, MUTED_TEXT_STYLE,
        format_currency,
    },
    modal::{ModalForm, modal_dialog},
    tab_page::tab_updated_response,
    view_state::Tab,
};

/// The form data for a transfer.
#[derive(Debug, Deserialize)]
pub struct TransferForm {
    pub recipient: String,
    pub amount: String,
    /// The tab the form was submitted from.
    #[serde(default)]
    pub tab: Tab,
}

/// Handle the transfer form submission.
pub async fn transfer_endpoint(
    State(state): State<LedgerState>,
    form: Result<Form<TransferForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let error = Error::from(rejection);
            tracing::debug!("rejected transfer form: {error}");
            return error.into_alert_response();
        }
    };

    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    match ledger.transfer(&form.recipient, &form.amount) {
        Ok(receipt) => {
            let alert = Alert::Success {
                message: "Transfer complete".to_owned(),
                details: format!(
                    "{} sent to {}",
                    format_currency(receipt.amount),
                    receipt.recipient
                ),
            };

            tab_updated_response(form.tab, &ledger.snapshot(), alert)
        }
        Err(error) => {
            tracing::debug!(
                "rejected transfer of {:?} to {:?}: {error}",
                form.amount,
                form.recipient
            );
            error.into_alert_response()
        }
    }
}

/// The transfer modal opened on top of `tab`, with `recipient` filled in if given.
pub fn transfer_form(tab: Tab, recipient: Option<&str>, balance: Decimal) -> Markup {
    let fields = html! {
        div
        {
            label for="recipient" class=(FORM_LABEL_STYLE) { "Recipient" }

            input
                id="recipient"
                type="text"
                name="recipient"
                value=[recipient]
                placeholder="Phone number or name"
                required
                autofocus[recipient.is_none()]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

            input
                id="amount"
                type="text"
                name="amount"
                inputmode="decimal"
                placeholder="0"
                required
                autofocus[recipient.is_some()]
                class={ (FORM_TEXT_INPUT_STYLE) " text-2xl font-bold" };
        }

        p class=(MUTED_TEXT_STYLE)
        {
            "Available: " (format_currency(balance))
        }
    };

    let form = ModalForm {
        endpoint: endpoints::TRANSFERS_API,
        tab,
    }
    .into_html(&fields, "Send", BUTTON_PRIMARY_STYLE);

    modal_dialog("Transfer", "Enter the recipient and the amount", false, &form)
}
