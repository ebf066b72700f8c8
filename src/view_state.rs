//! The view state that decides what the page shows: which tab is selected and which modal is open.
//!
//! View state lives in the URL rather than the server so that each request
//! carries everything needed to render the page.

use serde::{Deserialize, Serialize};

use crate::{endpoints, icon::IconKind};

/// A tab in the bottom navigation bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Savings,
    Transfers,
    Settings,
}

impl Tab {
    /// The tabs in the order they appear in the navigation bar.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Savings, Tab::Transfers, Tab::Settings];

    /// The name used for the tab in form fields. Matches the serde name.
    pub fn slug(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Savings => "savings",
            Tab::Transfers => "transfers",
            Tab::Settings => "settings",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Tab::Home => endpoints::ROOT,
            Tab::Savings => endpoints::SAVINGS_VIEW,
            Tab::Transfers => endpoints::TRANSFERS_VIEW,
            Tab::Settings => endpoints::SETTINGS_VIEW,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Savings => "Savings",
            Tab::Transfers => "Transfers",
            Tab::Settings => "Settings",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            Tab::Home => IconKind::Home,
            Tab::Savings => IconKind::PiggyBank,
            Tab::Transfers => IconKind::Send,
            Tab::Settings => IconKind::Settings,
        }
    }

    /// The URL for this tab with `modal` open.
    pub fn url_with_modal(self, modal: &Modal) -> String {
        let query = ViewQuery::from(modal);

        match serde_urlencoded::to_string(&query) {
            Ok(query) => format!("{}?{query}", self.endpoint()),
            Err(error) => {
                tracing::error!("could not encode view query {query:?}: {error}");
                self.endpoint().to_owned()
            }
        }
    }
}

/// A modal dialog shown on top of a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Send money, optionally with the recipient already filled in.
    Transfer { recipient: Option<String> },
    /// Top up the account.
    Deposit,
    /// Create a savings goal.
    NewGoal,
}

const TRANSFER_MODAL: &str = "transfer";
const DEPOSIT_MODAL: &str = "deposit";
const NEW_GOAL_MODAL: &str = "new_goal";

/// The query string accepted by every tab page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

impl ViewQuery {
    /// The modal named in the query, if any.
    ///
    /// Unknown modal names are ignored so that a stale or mistyped link
    /// still shows the page.
    pub fn modal(&self) -> Option<Modal> {
        match self.modal.as_deref()? {
            TRANSFER_MODAL => Some(Modal::Transfer {
                recipient: self
                    .recipient
                    .as_deref()
                    .map(str::trim)
                    .filter(|recipient| !recipient.is_empty())
                    .map(str::to_owned),
            }),
            DEPOSIT_MODAL => Some(Modal::Deposit),
            NEW_GOAL_MODAL => Some(Modal::NewGoal),
            other => {
                tracing::debug!("ignoring unknown modal {other:?}");
                None
            }
        }
    }
}

impl From<&Modal> for ViewQuery {
    fn from(modal: &Modal) -> Self {
        match modal {
            Modal::Transfer { recipient } => Self {
                modal: Some(TRANSFER_MODAL.to_owned()),
                recipient: recipient.clone(),
            },
            Modal::Deposit => Self {
                modal: Some(DEPOSIT_MODAL.to_owned()),
                recipient: None,
            },
            Modal::NewGoal => Self {
                modal: Some(NEW_GOAL_MODAL.to_owned()),
                recipient: None,
            },
        }
    }
}

#[cfg(test)]
mod view_query_tests {
    use crate::view_state::{Modal, ViewQuery};

    fn query(modal: Option<&str>, recipient: Option<&str>) -> ViewQuery {
        ViewQuery {
            modal: modal.map(str::to_owned),
            recipient: recipient.map(str::to_owned),
        }
    }

    #[test]
    fn no_modal_by_default() {
        assert_eq!(ViewQuery::default().modal(), None);
    }

    #[test]
    fn parses_each_modal() {
        assert_eq!(
            query(Some("transfer"), None).modal(),
            Some(Modal::Transfer { recipient: None })
        );
        assert_eq!(query(Some("deposit"), None).modal(), Some(Modal::Deposit));
        assert_eq!(query(Some("new_goal"), None).modal(), Some(Modal::NewGoal));
    }

    #[test]
    fn transfer_modal_keeps_recipient() {
        assert_eq!(
            query(Some("transfer"), Some("Maria K.")).modal(),
            Some(Modal::Transfer {
                recipient: Some("Maria K.".to_owned())
            })
        );
    }

    #[test]
    fn blank_recipient_is_ignored() {
        assert_eq!(
            query(Some("transfer"), Some("  ")).modal(),
            Some(Modal::Transfer { recipient: None })
        );
    }

    #[test]
    fn unknown_modal_is_ignored() {
        assert_eq!(query(Some("loan"), None).modal(), None);
    }
}

#[cfg(test)]
mod tab_tests {
    use axum::http::Uri;

    use crate::view_state::{Modal, Tab};

    #[test]
    fn modal_url_encodes_recipient() {
        let url = Tab::Transfers.url_with_modal(&Modal::Transfer {
            recipient: Some("Alexey S.".to_owned()),
        });

        assert_eq!(url, "/transfers?modal=transfer&recipient=Alexey+S.");
        assert!(url.parse::<Uri>().is_ok());
    }

    #[test]
    fn modal_url_without_recipient() {
        assert_eq!(Tab::Home.url_with_modal(&Modal::Deposit), "/?modal=deposit");
        assert_eq!(
            Tab::Savings.url_with_modal(&Modal::NewGoal),
            "/savings?modal=new_goal"
        );
    }

    #[test]
    fn slug_round_trips_through_serde() {
        for tab in Tab::ALL {
            let parsed: Tab = serde_json::from_value(serde_json::json!(tab.slug())).unwrap();

            assert_eq!(parsed, tab);
        }
    }

    #[test]
    fn tabs_have_distinct_endpoints() {
        for (i, a) in Tab::ALL.iter().enumerate() {
            for b in &Tab::ALL[i + 1..] {
                assert_ne!(a.endpoint(), b.endpoint());
            }
        }
    }
}
