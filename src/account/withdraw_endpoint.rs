//! Defines the endpoint for withdrawing money from the account.
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

/// The state needed to withdraw money from the account.
#[derive(Debug, Clone)]
pub struct WithdrawState {
    /// The account to withdraw money from.
    pub account: Arc<Mutex<Account>>,
}

impl FromRef<AppState> for WithdrawState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            account: state.account.clone(),
        }
    }
}

/// The query parameters for a withdrawal.
#[derive(Debug, Deserialize)]
pub struct WithdrawQuery {
    /// The amount of money to withdraw.
    pub amount: Decimal,
}

/// A route handler for withdrawing money from the account.
///
/// Responds with the updated account on success, or a 400 naming the rule
/// that was broken. Asking for more money than the account holds leaves the
/// balance untouched.
pub async fn withdraw_endpoint(
    State(state): State<WithdrawState>,
    Query(query): Query<WithdrawQuery>,
) -> impl IntoResponse {
    let mut account = match state.account.lock() {
        Ok(account) => account,
        Err(error) => {
            tracing::error!("Could not acquire account lock: {error}");
            return Error::AccountLock.into_response();
        }
    };

    match account.withdraw(query.amount) {
        Ok(()) => (StatusCode::OK, Json(AccountResponse::from(&*account))).into_response(),
        Err(error) => error.into_response(),
    }
}
