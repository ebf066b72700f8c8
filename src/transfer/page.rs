//! The transfers tab: ways to send money and frequent contacts.

use axum::{
    extract::{Query, State},
    response::Response,
};
use maud::{Markup, html};

use crate::{
    app_state::LedgerState,
    coming_soon::coming_soon_url,
    html::{
        ALERT_CONTAINER_ID, CARD_STYLE, MUTED_TEXT_STYLE, PAGE_CONTAINER_STYLE, PAGE_TITLE_STYLE,
        SECTION_TITLE_STYLE, avatar, initials,
    },
    icon::{IconKind, icon},
    profile::{Contact, FREQUENT_CONTACTS},
    tab_page::render_tab_page,
    view_state::{Modal, Tab, ViewQuery},
};

/// Render the transfers page.
pub async fn get_transfers_page(
    State(state): State<LedgerState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    render_tab_page(Tab::Transfers, &state, &query)
}

/// A way of sending money.
struct TransferMethod {
    title: &'static str,
    icon: IconKind,
    /// Whether sending money this way works yet.
    available: bool,
}

const TRANSFER_METHODS: [TransferMethod; 4] = [
    TransferMethod {
        title: "By phone number",
        icon: IconKind::User,
        available: true,
    },
    TransferMethod {
        title: "To card",
        icon: IconKind::CreditCard,
        available: true,
    },
    TransferMethod {
        title: "QR code",
        icon: IconKind::QrCode,
        available: false,
    },
    TransferMethod {
        title: "To another bank",
        icon: IconKind::Building,
        available: true,
    },
];

pub fn transfers_content() -> Markup {
    html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class={ (PAGE_TITLE_STYLE) " pt-4" } { "Transfers" }

            section id="transfer-methods" class="grid grid-cols-2 gap-4"
            {
                @for method in &TRANSFER_METHODS {
                    (transfer_method_card(method))
                }
            }

            section id="frequent-contacts" class="space-y-3"
            {
                h2 class=(SECTION_TITLE_STYLE) { "Frequent contacts" }

                ul class="space-y-3"
                {
                    @for contact in &FREQUENT_CONTACTS {
                        (contact_row(contact))
                    }
                }
            }
        }
    }
}

fn transfer_method_card(method: &TransferMethod) -> Markup {
    let card_style = "flex flex-col items-center gap-3 text-center cursor-pointer";
    let body = html! {
        div class="rounded-full bg-cyan-400/20 p-4 text-cyan-400"
        {
            (icon(method.icon, "h-8 w-8"))
        }
        p class="font-medium" { (method.title) }
    };

    if method.available {
        let url = Tab::Transfers.url_with_modal(&Modal::Transfer { recipient: None });

        html! {
            a href=(url) class={ (CARD_STYLE) " " (card_style) } { (body) }
        }
    } else {
        html! {
            button
                type="button"
                hx-get=(coming_soon_url(method.title))
                hx-target={ "#" (ALERT_CONTAINER_ID) }
                class={ (CARD_STYLE) " " (card_style) }
            {
                (body)
            }
        }
    }
}

fn contact_row(contact: &Contact) -> Markup {
    let url = Tab::Transfers.url_with_modal(&Modal::Transfer {
        recipient: Some(contact.name.to_owned()),
    });

    html! {
        li
        {
            a href=(url) class={ "flex items-center gap-3 " (CARD_STYLE) }
            {
                (avatar(&initials(contact.name, 1), "h-10 w-10"))

                div
                {
                    p class="font-medium" { (contact.name) }
                    p class=(MUTED_TEXT_STYLE) { (contact.phone) }
                }
            }
        }
    }
}
