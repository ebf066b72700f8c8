//! Topping up the account: the deposit modal and the endpoint it posts to.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Response,
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    app_state::LedgerState,
    endpoints,
    html::{BUTTON_ACCENT_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, format_signed_currency},
    modal::{ModalForm, modal_dialog},
    tab_page::tab_updated_response,
    view_state::Tab,
};

/// The form data for a deposit.
#[derive(Debug, Deserialize)]
pub struct DepositForm {
    pub amount: String,
    /// The tab the form was submitted from.
    #[serde(default)]
    pub tab: Tab,
}

/// Handle the deposit form submission.
pub async fn deposit_endpoint(
    State(state): State<LedgerState>,
    form: Result<Form<DepositForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let error = Error::from(rejection);
            tracing::debug!("rejected deposit form: {error}");
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

    match ledger.deposit(&form.amount) {
        Ok(receipt) => {
            let alert = Alert::Success {
                message: "Account topped up".to_owned(),
                details: format_signed_currency(receipt.amount),
            };

            tab_updated_response(form.tab, &ledger.snapshot(), alert)
        }
        Err(error) => {
            tracing::debug!("rejected deposit of {:?}: {error}", form.amount);
            error.into_alert_response()
        }
    }
}

/// The deposit modal opened on top of `tab`.
pub fn deposit_form(tab: Tab) -> Markup {
    let fields = html! {
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
                autofocus
                class={ (FORM_TEXT_INPUT_STYLE) " text-2xl font-bold" };
        }
    };

    let form = ModalForm {
        endpoint: endpoints::DEPOSITS_API,
        tab,
    }
    .into_html(&fields, "Top up", BUTTON_ACCENT_STYLE);

    modal_dialog("Top up", "Enter the amount to add", true, &form)
}
