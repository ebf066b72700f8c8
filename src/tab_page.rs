//! Rendering shared by the four tab pages: the page shell, the open modal and
//! the partial page sent back after a form is submitted.

use axum::response::{Html, IntoResponse, Response};
use axum_htmx::HxPushUrl;
use maud::{Markup, html};

use crate::{
    Error,
    alert::Alert,
    app_state::LedgerState,
    home_page::home_content,
    html::{APP_ID, base},
    ledger::LedgerSnapshot,
    modal::modal_view,
    navigation::TabBar,
    savings::savings_content,
    settings_page::settings_content,
    transfer::transfers_content,
    view_state::{Modal, Tab, ViewQuery},
};

/// The content of `tab` with `modal` open on top of it.
pub fn tab_content(tab: Tab, snapshot: &LedgerSnapshot, modal: Option<&Modal>) -> Markup {
    let content = match tab {
        Tab::Home => home_content(snapshot),
        Tab::Savings => savings_content(&snapshot.savings_goals),
        Tab::Transfers => transfers_content(),
        Tab::Settings => settings_content(),
    };

    html! {
        (content)

        @if let Some(modal) = modal {
            (modal_view(modal, tab, snapshot.balance))
        }
    }
}

/// The full HTML document for `tab`.
pub fn tab_view(tab: Tab, snapshot: &LedgerSnapshot, modal: Option<&Modal>) -> Markup {
    let content = html! {
        main id=(APP_ID)
        {
            (tab_content(tab, snapshot, modal))
        }

        (TabBar::new(tab).into_html())
    };

    base(tab.title(), &content)
}

/// Render `tab` from the current ledger state with the modal named in `query` open.
pub fn render_tab_page(tab: Tab, state: &LedgerState, query: &ViewQuery) -> Response {
    let snapshot = match state.ledger.lock() {
        Ok(ledger) => ledger.snapshot(),
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_response();
        }
    };

    tab_view(tab, &snapshot, query.modal().as_ref()).into_response()
}

/// The response to a successful form submission: the content of `tab` with
/// no modal open, and `alert` swapped into the alert container.
///
/// The tab URL is pushed to the browser history so that reloading the page
/// does not reopen the modal.
pub fn tab_updated_response(tab: Tab, snapshot: &LedgerSnapshot, alert: Alert) -> Response {
    let content = html! {
        (tab_content(tab, snapshot, None))
        (alert.into_oob_html())
    };

    (
        HxPushUrl(tab.endpoint().to_owned()),
        Html(content.into_string()),
    )
        .into_response()
}
