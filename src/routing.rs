//! Application router configuration.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, Error,
    app_state::LedgerState,
    coming_soon::get_coming_soon_alert,
    deposit::deposit_endpoint,
    endpoints,
    error_page::{get_404_not_found, get_internal_server_error_page},
    home_page::get_home_page,
    savings::{create_goal_endpoint, get_savings_page},
    settings_page::get_settings_page,
    transfer::{get_transfers_page, transfer_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(endpoints::SAVINGS_VIEW, get(get_savings_page))
        .route(endpoints::TRANSFERS_VIEW, get(get_transfers_page))
        .route(endpoints::SETTINGS_VIEW, get(get_settings_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::STATE_API, get(get_state_snapshot))
        .route(endpoints::TRANSFERS_API, post(transfer_endpoint))
        .route(endpoints::DEPOSITS_API, post(deposit_endpoint))
        .route(endpoints::GOALS_API, post(create_goal_endpoint))
        .route(endpoints::COMING_SOON_API, get(get_coming_soon_alert));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The balance, transaction log and savings goals as JSON.
async fn get_state_snapshot(State(state): State<LedgerState>) -> Response {
    match state.ledger.lock() {
        Ok(ledger) => Json(ledger.snapshot()).into_response(),
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            Error::LedgerLockError.into_response()
        }
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        AppState, endpoints,
        ledger::{DEFAULT_OPENING_BALANCE, LedgerConfig},
        routing::build_router,
    };

    fn get_test_server() -> TestServer {
        let state =
            AppState::new(&LedgerConfig::default()).expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn tab_pages_are_served() {
        let server = get_test_server();

        for endpoint in [
            endpoints::ROOT,
            endpoints::SAVINGS_VIEW,
            endpoints::TRANSFERS_VIEW,
            endpoints::SETTINGS_VIEW,
        ] {
            server.get(endpoint).await.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn state_starts_with_demo_data() {
        let server = get_test_server();

        let state: Value = server.get(endpoints::STATE_API).await.json();

        assert_eq!(state["balance"], json!(DEFAULT_OPENING_BALANCE.to_string()));
        assert_eq!(state["transactions"].as_array().unwrap().len(), 3);
        assert_eq!(state["transactions"][0]["id"], json!(3));
        assert_eq!(state["savings_goals"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn operations_update_state() {
        let server = get_test_server();

        server
            .post(endpoints::TRANSFERS_API)
            .form(&[("recipient", "Maria K."), ("amount", "1000"), ("tab", "home")])
            .await
            .assert_status_ok();
        server
            .post(endpoints::DEPOSITS_API)
            .form(&[("amount", "5000")])
            .await
            .assert_status_ok();
        server
            .post(endpoints::GOALS_API)
            .form(&[("name", "Car"), ("target", "500000"), ("tab", "savings")])
            .await
            .assert_status_ok();

        let state: Value = server.get(endpoints::STATE_API).await.json();
        assert_eq!(state["balance"], json!("129850.50"));
        let transactions = state["transactions"].as_array().unwrap();
        assert_eq!(transactions.len(), 5);
        assert_eq!(transactions[0]["counterparty"], json!("Account top-up"));
        assert_eq!(transactions[1]["counterparty"], json!("Maria K."));
        assert_eq!(transactions[1]["amount"], json!("-1000"));
        assert_eq!(state["savings_goals"][2]["name"], json!("Car"));
    }

    #[tokio::test]
    async fn rejected_operation_leaves_state_unchanged() {
        let server = get_test_server();

        server
            .post(endpoints::TRANSFERS_API)
            .form(&[("recipient", "Maria K."), ("amount", "999999999")])
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let state: Value = server.get(endpoints::STATE_API).await.json();
        assert_eq!(state["balance"], json!("125850.50"));
        assert_eq!(state["transactions"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unreadable_form_shows_alert() {
        let server = get_test_server();

        let posts = [
            (
                endpoints::TRANSFERS_API,
                vec![("recipient", "Maria K."), ("amount", "10"), ("tab", "bogus")],
            ),
            (endpoints::DEPOSITS_API, vec![("tab", "home")]),
            (endpoints::GOALS_API, vec![("name", "Car")]),
        ];

        for (endpoint, form) in posts {
            let response = server.post(endpoint).form(&form).await;

            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            let text = response.text();
            assert!(text.contains("role=\"alert\""), "{endpoint}: {text}");
            assert!(text.contains("Check the form"), "{endpoint}: {text}");
            assert!(!text.contains("Failed to deserialize"), "{endpoint}: {text}");
        }

        let state: Value = server.get(endpoints::STATE_API).await.json();
        assert_eq!(state["balance"], json!("125850.50"));
    }

    #[tokio::test]
    async fn coming_soon_returns_alert() {
        let server = get_test_server();

        let response = server
            .get(endpoints::COMING_SOON_API)
            .add_query_param("feature", "Help")
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("Help: coming soon"));
    }
}
