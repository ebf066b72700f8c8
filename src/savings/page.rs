//! The savings tab: a card with a progress bar for each goal.

use axum::{
    extract::{Query, State},
    response::Response,
};
use maud::{Markup, html};

use crate::{
    app_state::LedgerState,
    html::{
        BUTTON_ACCENT_STYLE, CARD_STYLE, MUTED_TEXT_STYLE, PAGE_CONTAINER_STYLE,
        PAGE_TITLE_STYLE, format_currency,
    },
    icon::{IconKind, icon},
    ledger::SavingsGoal,
    tab_page::render_tab_page,
    view_state::{Modal, Tab, ViewQuery},
};

/// Render the savings page.
pub async fn get_savings_page(
    State(state): State<LedgerState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    render_tab_page(Tab::Savings, &state, &query)
}

pub fn savings_content(goals: &[SavingsGoal]) -> Markup {
    let new_goal_url = Tab::Savings.url_with_modal(&Modal::NewGoal);

    html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="flex items-center justify-between pt-4"
            {
                h1 class=(PAGE_TITLE_STYLE) { "Savings" }

                a
                    href=(new_goal_url)
                    aria-label="New goal"
                    class={ (BUTTON_ACCENT_STYLE) " flex-none" }
                {
                    (icon(IconKind::Plus, "h-5 w-5"))
                }
            }

            ul id="savings-goals" class="space-y-4"
            {
                @for goal in goals {
                    (goal_card(goal))
                }
            }

            a
                href=(new_goal_url)
                class="flex flex-col items-center gap-2 rounded-xl border-2 border-dashed
                border-fuchsia-500/40 p-6 text-center hover:border-fuchsia-500"
            {
                div class="text-fuchsia-400" { (icon(IconKind::Target, "h-10 w-10")) }
                p class="font-semibold" { "Create a new goal" }
                p class=(MUTED_TEXT_STYLE) { "Start saving for your dream" }
            }
        }
    }
}

fn goal_card(goal: &SavingsGoal) -> Markup {
    let percent = goal.progress_percent();

    html! {
        li class={ "space-y-3 " (CARD_STYLE) }
        {
            div class="flex items-center justify-between"
            {
                h2 class="font-semibold" { (goal.name) }
                span class="font-bold text-fuchsia-400" { (percent) "%" }
            }

            div
                role="progressbar"
                aria-label=(goal.name)
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=(percent)
                class="h-2 w-full overflow-hidden rounded-full bg-gray-800"
            {
                div
                    class="h-full rounded-full bg-gradient-to-r from-cyan-400 to-fuchsia-500"
                    style={ "width: " (percent) "%" }
                {}
            }

            div class={ "flex justify-between " (MUTED_TEXT_STYLE) }
            {
                span { (format_currency(goal.current_amount)) }
                span { (format_currency(goal.target_amount)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use rust_decimal::Decimal;
    use scraper::{Html, Selector};

    use crate::{
        app_state::LedgerState,
        ledger::{Ledger, SavingsGoal},
        savings::{get_savings_page, savings_content},
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
        view_state::ViewQuery,
    };

    fn progress_values(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("[role=progressbar]").unwrap())
            .filter_map(|bar| bar.value().attr("aria-valuenow"))
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test]
    async fn shows_demo_goals() {
        let state = LedgerState {
            ledger: Arc::new(Mutex::new(Ledger::demo())),
        };

        let response = get_savings_page(State(state), Query(ViewQuery::default())).await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let names: Vec<String> = html
            .select(&Selector::parse("#savings-goals h2").unwrap())
            .map(|name| name.text().collect())
            .collect();
        assert_eq!(names, ["Vacation 2026", "New gadget"]);
        assert_eq!(progress_values(&html), ["57", "53"]);
    }

    #[test]
    fn progress_is_clamped() {
        let goals = [SavingsGoal {
            name: "Bike".to_owned(),
            current_amount: Decimal::from(750),
            target_amount: Decimal::from(500),
        }];

        let html = Html::parse_fragment(&savings_content(&goals).into_string());

        assert_eq!(progress_values(&html), ["100"]);
        assert!(html.html().contains("width: 100%"));
    }

    #[test]
    fn both_new_goal_links_open_modal() {
        let html = Html::parse_fragment(&savings_content(&[]).into_string());

        let links = html
            .select(&Selector::parse("a[href=\"/savings?modal=new_goal\"]").unwrap())
            .count();
        assert_eq!(links, 2);
    }
}
