//! Application router configuration wiring each endpoint to its handler.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    account::{deposit_endpoint, get_account_endpoint, withdraw_endpoint},
    endpoints,
    health::get_health,
    not_found::get_404_not_found,
    vehicle::{get_abstraction, get_inheritance, get_polymorphism},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(endpoints::ABSTRACTION, get(get_abstraction))
        .route(endpoints::DEPOSIT, post(deposit_endpoint))
        .route(endpoints::WITHDRAW, post(withdraw_endpoint))
        .route(endpoints::ACCOUNT, get(get_account_endpoint))
        .route(endpoints::INHERITANCE, get(get_inheritance))
        .route(endpoints::POLYMORPHISM, get(get_polymorphism))
        .fallback(get_404_not_found)
        .with_state(state)
}


#[cfg(test)]
mod fallback_tests {
    use axum_test::TestServer;
    use rust_decimal_macros::dec;

    use crate::{AppState, ErrorResponse, account::Account, routing::build_router};

    #[tokio::test]
    async fn unknown_route_gets_json_not_found() {
        let account = Account::new("PE01", "Bruce Wayne", dec!(100)).unwrap();
        let app = build_router(AppState::new(account));
        let server = TestServer::try_new(app).expect("Could not create test server.");

        let response = server.get("/api/nothing-here").await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<ErrorResponse>(),
            ErrorResponse {
                message: "the requested resource could not be found".to_owned()
            }
        );
    }
}
