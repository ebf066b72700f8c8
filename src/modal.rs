//! The modal dialog shell and the form rendered inside each kind of modal.

use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{
    deposit::deposit_form,
    html::{ALERT_CONTAINER_ID, APP_ID, BUTTON_SECONDARY_STYLE, CARD_ACCENT_STYLE, CARD_PRIMARY_STYLE},
    savings::new_goal_form,
    transfer::transfer_form,
    view_state::{Modal, Tab},
};

/// Render the dialog for `modal` on top of `tab`.
///
/// `balance` is shown in the transfer dialog as the amount available to send.
pub fn modal_view(modal: &Modal, tab: Tab, balance: Decimal) -> Markup {
    match modal {
        Modal::Transfer { recipient } => transfer_form(tab, recipient.as_deref(), balance),
        Modal::Deposit => deposit_form(tab),
        Modal::NewGoal => new_goal_form(tab),
    }
}

/// The overlay, title and description shared by every modal.
///
/// `accent` switches the border from the primary to the accent colour.
pub fn modal_dialog(title: &str, description: &str, accent: bool, body: &Markup) -> Markup {
    let card_style = if accent {
        CARD_ACCENT_STYLE
    } else {
        CARD_PRIMARY_STYLE
    };

    html! {
        div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4"
        {
            div
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                class={ "w-full max-w-md space-y-4 " (card_style) }
            {
                div
                {
                    h2 id="modal-title" class="text-2xl font-bold" { (title) }
                    p class="text-sm text-gray-400" { (description) }
                }

                (body)
            }
        }
    }
}

/// Attributes every modal form shares: where to post, and where to put the
/// page content or the error alert that comes back.
pub struct ModalForm<'a> {
    pub endpoint: &'a str,
    pub tab: Tab,
}

impl ModalForm<'_> {
    /// Wrap `fields` in a form with a hidden field recording the current tab,
    /// and a footer with a cancel link and a submit button.
    pub fn into_html(self, fields: &Markup, submit_label: &str, submit_style: &str) -> Markup {
        html! {
            form
                hx-post=(self.endpoint)
                hx-target={ "#" (APP_ID) }
                hx-target-error={ "#" (ALERT_CONTAINER_ID) }
                class="space-y-4"
            {
                input type="hidden" name="tab" value=(self.tab.slug());

                (fields)

                div class="flex gap-2 pt-2"
                {
                    a href=(self.tab.endpoint()) class=(BUTTON_SECONDARY_STYLE) { "Cancel" }
                    button type="submit" class=(submit_style) { (submit_label) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        modal::modal_view,
        test_utils::{assert_form_input, assert_hx_endpoint, assert_valid_html, must_get_form},
        view_state::{Modal, Tab},
    };

    fn render(modal: &Modal, tab: Tab) -> Html {
        let markup = modal_view(modal, tab, Decimal::from(100)).into_string();

        Html::parse_fragment(&markup)
    }

    #[test]
    fn each_modal_posts_to_its_endpoint() {
        let cases = [
            (Modal::Transfer { recipient: None }, endpoints::TRANSFERS_API),
            (Modal::Deposit, endpoints::DEPOSITS_API),
            (Modal::NewGoal, endpoints::GOALS_API),
        ];

        for (modal, endpoint) in cases {
            let html = render(&modal, Tab::Home);
            assert_valid_html(&html);

            let form = must_get_form(&html);
            assert_hx_endpoint(&form, endpoint, "hx-post");
            assert_hx_endpoint(&form, "#app", "hx-target");
            assert_hx_endpoint(&form, "#alert-container", "hx-target-error");
        }
    }

    #[test]
    fn form_remembers_tab() {
        let html = render(&Modal::NewGoal, Tab::Savings);

        let form = must_get_form(&html);
        let tab = form
            .select(&Selector::parse("input[name=tab]").unwrap())
            .next()
            .expect("no tab input");
        assert_eq!(tab.value().attr("value"), Some("savings"));
    }

    #[test]
    fn cancel_links_back_to_tab() {
        let html = render(&Modal::Deposit, Tab::Home);

        let cancel = html
            .select(&Selector::parse("form a").unwrap())
            .next()
            .expect("no cancel link");
        assert_eq!(cancel.value().attr("href"), Some(endpoints::ROOT));
    }

    #[test]
    fn transfer_modal_has_recipient_and_amount() {
        let html = render(&Modal::Transfer { recipient: None }, Tab::Transfers);

        let form = must_get_form(&html);
        assert_form_input(&form, "recipient", "text");
        assert_form_input(&form, "amount", "text");
    }
}
