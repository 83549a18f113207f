//! Defines the endpoint for depositing money into the account.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    AppState, Error,
    account::{Account, AccountResponse},
};

/// The state needed to deposit money into the account.
#[derive(Debug, Clone)]
pub struct DepositState {
    /// The account to deposit money into.
    pub account: Arc<Mutex<Account>>,
}

impl FromRef<AppState> for DepositState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            account: state.account.clone(),
        }
    }
}

/// The query parameters for a deposit.
#[derive(Debug, Deserialize)]
pub struct DepositQuery {
    /// The amount of money to deposit.
    pub amount: Decimal,
}

/// A route handler for depositing money into the account.
///
/// Responds with the updated account on success, or a 400 naming the rule
/// that was broken.
pub async fn deposit_endpoint(
    State(state): State<DepositState>,
    Query(query): Query<DepositQuery>,
) -> impl IntoResponse {
    let mut account = match state.account.lock() {
        Ok(account) => account,
        Err(error) => {
            tracing::error!("Could not acquire account lock: {error}");
            return Error::AccountLock.into_response();
        }
    };

    match account.deposit(query.amount) {
        Ok(()) => (StatusCode::OK, Json(AccountResponse::from(&*account))).into_response(),
        Err(error) => error.into_response(),
    }
}
