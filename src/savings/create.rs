//! The new goal modal and the endpoint it posts to.

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
    html::{BUTTON_ACCENT_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    modal::{ModalForm, modal_dialog},
    tab_page::tab_updated_response,
    view_state::Tab,
};

/// The form data for a new savings goal.
#[derive(Debug, Deserialize)]
pub struct NewGoalForm {
    pub name: String,
    pub target: String,
    /// The tab the form was submitted from.
    #[serde(default)]
    pub tab: Tab,
}

/// Handle the new goal form submission.
pub async fn create_goal_endpoint(
    State(state): State<LedgerState>,
    form: Result<Form<NewGoalForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let error = Error::from(rejection);
            tracing::debug!("rejected savings goal form: {error}");
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

    match ledger.create_savings_goal(&form.name, &form.target) {
        Ok(goal) => {
            let alert = Alert::Success {
                message: "Goal created".to_owned(),
                details: format!("Start saving for {}", goal.name),
            };

            tab_updated_response(form.tab, &ledger.snapshot(), alert)
        }
        Err(error) => {
            tracing::debug!(
                "rejected savings goal {:?} with target {:?}: {error}",
                form.name,
                form.target
            );
            error.into_alert_response()
        }
    }
}

/// The new goal modal opened on top of `tab`.
pub fn new_goal_form(tab: Tab) -> Markup {
    let fields = html! {
        div
        {
            label for="name" class=(FORM_LABEL_STYLE) { "Goal name" }

            input
                id="name"
                type="text"
                name="name"
                placeholder="e.g. New car"
                required
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="target" class=(FORM_LABEL_STYLE) { "Target amount" }

            input
                id="target"
                type="text"
                name="target"
                inputmode="decimal"
                placeholder="0"
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    };

    let form = ModalForm {
        endpoint: endpoints::GOALS_API,
        tab,
    }
    .into_html(&fields, "Create", BUTTON_ACCENT_STYLE);

    modal_dialog("New goal", "Name your goal and set a target amount", true, &form)
}
