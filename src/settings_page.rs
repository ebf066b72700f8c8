//! The settings tab: the profile card and the account menu.

use axum::{
    extract::{Query, State},
    response::Response,
};
use maud::{Markup, html};

use crate::{
    app_state::LedgerState,
    coming_soon::coming_soon_url,
    html::{
        ALERT_CONTAINER_ID, BUTTON_SECONDARY_STYLE, CARD_PRIMARY_STYLE, CARD_STYLE,
        MUTED_TEXT_STYLE, PAGE_CONTAINER_STYLE, PAGE_TITLE_STYLE, avatar, initials,
    },
    icon::{IconKind, icon},
    profile::PROFILE,
    tab_page::render_tab_page,
    view_state::{Tab, ViewQuery},
};

/// Render the settings page.
pub async fn get_settings_page(
    State(state): State<LedgerState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    render_tab_page(Tab::Settings, &state, &query)
}

const MENU_ITEMS: [(&str, IconKind); 6] = [
    ("Notifications", IconKind::Bell),
    ("Security", IconKind::Lock),
    ("My cards", IconKind::CreditCard),
    ("Documents", IconKind::FileText),
    ("Help", IconKind::HelpCircle),
    ("Log out", IconKind::LogOut),
];

pub fn settings_content() -> Markup {
    let alert_target = format!("#{ALERT_CONTAINER_ID}");

    html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class={ (PAGE_TITLE_STYLE) " pt-4" } { "Settings" }

            section id="profile" class=(CARD_PRIMARY_STYLE)
            {
                div class="flex items-center gap-4 mb-4"
                {
                    (avatar(&initials(PROFILE.name, 2), "h-16 w-16 text-xl"))

                    div
                    {
                        h2 class="text-xl font-bold" { (PROFILE.name) }
                        p class=(MUTED_TEXT_STYLE) { (PROFILE.phone) }
                        p class="text-xs text-gray-500" { (PROFILE.email) }
                    }
                }

                button
                    type="button"
                    hx-get=(coming_soon_url("Edit profile"))
                    hx-target=(alert_target)
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    (icon(IconKind::Edit, "h-4 w-4"))
                    "Edit profile"
                }
            }

            ul id="settings-menu" class="space-y-2"
            {
                @for (title, kind) in MENU_ITEMS {
                    li
                    {
                        button
                            type="button"
                            hx-get=(coming_soon_url(title))
                            hx-target=(alert_target)
                            class={ "flex w-full items-center justify-between " (CARD_STYLE) }
                        {
                            span class="flex items-center gap-3"
                            {
                                span class="text-cyan-400" { (icon(kind, "h-5 w-5")) }
                                span class="font-medium" { (title) }
                            }

                            span class="text-gray-500" { (icon(IconKind::ChevronRight, "h-5 w-5")) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use scraper::{Html, Selector};

    use crate::{
        app_state::LedgerState,
        ledger::Ledger,
        settings_page::get_settings_page,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
        view_state::ViewQuery,
    };

    async fn render() -> Html {
        let state = LedgerState {
            ledger: Arc::new(Mutex::new(Ledger::demo())),
        };

        let response = get_settings_page(State(state), Query(ViewQuery::default())).await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        html
    }

    #[tokio::test]
    async fn shows_profile() {
        let html = render().await;

        let profile = html
            .select(&Selector::parse("#profile").unwrap())
            .next()
            .expect("no profile card");
        let text = profile.text().collect::<String>();
        assert!(text.contains("Alexey Smirnov"));
        assert!(text.contains("+7 999 123-45-67"));
        assert!(text.contains("alexey@cyberbank.ru"));
        assert!(text.contains("AS"));
    }

    #[tokio::test]
    async fn menu_items_are_coming_soon() {
        let html = render().await;

        let urls: Vec<&str> = html
            .select(&Selector::parse("#settings-menu button").unwrap())
            .filter_map(|button| button.value().attr("hx-get"))
            .collect();

        assert_eq!(
            urls,
            [
                "/api/coming_soon?feature=Notifications",
                "/api/coming_soon?feature=Security",
                "/api/coming_soon?feature=My+cards",
                "/api/coming_soon?feature=Documents",
                "/api/coming_soon?feature=Help",
                "/api/coming_soon?feature=Log+out",
            ]
        );
    }
}
