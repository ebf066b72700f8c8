//! The home tab: account balance, quick actions and recent transactions.

use axum::{
    extract::{Query, State},
    response::Response,
};
use maud::{Markup, html};

use crate::{
    app_state::LedgerState,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_PRIMARY_STYLE, CARD_STYLE,
        MUTED_TEXT_STYLE, PAGE_CONTAINER_STYLE, SECTION_TITLE_STYLE, avatar,
        format_currency, format_signed_currency, initials,
    },
    icon::{IconKind, icon},
    ledger::{LedgerSnapshot, OccurredAt, Transaction},
    profile::PROFILE,
    tab_page::render_tab_page,
    view_state::{Modal, Tab, ViewQuery},
};

/// Render the home page.
pub async fn get_home_page(
    State(state): State<LedgerState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    render_tab_page(Tab::Home, &state, &query)
}

pub fn home_content(snapshot: &LedgerSnapshot) -> Markup {
    let transfer_url = Tab::Home.url_with_modal(&Modal::Transfer { recipient: None });
    let deposit_url = Tab::Home.url_with_modal(&Modal::Deposit);

    html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            header class="flex items-center justify-between pt-4"
            {
                div
                {
                    h1
                        class="text-3xl font-bold bg-gradient-to-r from-cyan-400
                        to-fuchsia-500 bg-clip-text text-transparent"
                    {
                        "CyberBank"
                    }
                    p class=(MUTED_TEXT_STYLE) { "Banking of the future" }
                }

                (avatar(&initials(PROFILE.name, 2), "h-12 w-12"))
            }

            section class=(CARD_PRIMARY_STYLE) aria-labelledby="balance-label"
            {
                p id="balance-label" class=(MUTED_TEXT_STYLE) { "Available balance" }
                p id="balance" class="mt-2 mb-6 text-4xl font-bold text-cyan-400"
                {
                    (format_currency(snapshot.balance))
                }

                div class="flex gap-3"
                {
                    a href=(transfer_url) class=(BUTTON_PRIMARY_STYLE)
                    {
                        (icon(IconKind::ArrowUp, "h-4 w-4"))
                        "Transfer"
                    }
                    a href=(deposit_url) class=(BUTTON_SECONDARY_STYLE)
                    {
                        (icon(IconKind::Plus, "h-4 w-4"))
                        "Top up"
                    }
                }
            }

            section class="space-y-3"
            {
                h2 class=(SECTION_TITLE_STYLE) { "Recent transactions" }

                @if snapshot.transactions.is_empty() {
                    p class=(MUTED_TEXT_STYLE) { "No transactions yet." }
                } @else {
                    ul id="transactions" class="space-y-3"
                    {
                        @for transaction in &snapshot.transactions {
                            (transaction_row(transaction))
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let amount_style = if transaction.is_credit() {
        "font-bold text-cyan-400"
    } else {
        "font-bold text-gray-100"
    };

    html! {
        li class={ "flex items-center justify-between " (CARD_STYLE) }
        {
            div class="flex items-center gap-3"
            {
                div class="rounded-lg bg-fuchsia-500/20 p-2 text-fuchsia-400"
                {
                    (icon(IconKind::from(transaction.category), "h-5 w-5"))
                }
                div
                {
                    p class="font-medium" { (transaction.counterparty) }
                    p class=(MUTED_TEXT_STYLE) { (date_label(transaction.occurred_at)) }
                }
            }

            p class=(amount_style) { (format_signed_currency(transaction.amount)) }
        }
    }
}

/// A short label for when a transaction happened, e.g. "Today" or "03 Dec".
fn date_label(occurred_at: OccurredAt) -> String {
    match occurred_at {
        OccurredAt::Today => "Today".to_owned(),
        OccurredAt::On(date) => {
            let month: String = date.month().to_string().chars().take(3).collect();
            format!("{:02} {month}", date.day())
        }
    }
}
