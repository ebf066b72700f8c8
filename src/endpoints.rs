//! The API endpoints URIs.

/// The home tab with the balance and recent transactions.
pub const ROOT: &str = "/";
/// The savings goals tab.
pub const SAVINGS_VIEW: &str = "/savings";
/// The transfers tab.
pub const TRANSFERS_VIEW: &str = "/transfers";
/// The settings tab.
pub const SETTINGS_VIEW: &str = "/settings";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for reading the ledger state as JSON.
pub const STATE_API: &str = "/api/state";
/// The route to send money.
pub const TRANSFERS_API: &str = "/api/transfers";
/// The route to top up the account.
pub const DEPOSITS_API: &str = "/api/deposits";
/// The route to create a savings goal.
pub const GOALS_API: &str = "/api/goals";
/// The route for features that have not been built yet.
pub const COMING_SOON_API: &str = "/api/coming_soon";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::SAVINGS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSFERS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::SETTINGS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::STATE_API);
        assert_endpoint_is_valid_uri(endpoints::TRANSFERS_API);
        assert_endpoint_is_valid_uri(endpoints::DEPOSITS_API);
        assert_endpoint_is_valid_uri(endpoints::GOALS_API);
        assert_endpoint_is_valid_uri(endpoints::COMING_SOON_API);
    }
}
