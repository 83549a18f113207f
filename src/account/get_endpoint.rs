//! Defines the endpoint for reading the current state of the account.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState, Error,
    account::{Account, AccountResponse},
};

/// The state needed to read the account.
#[derive(Debug, Clone)]
pub struct AccountViewState {
    /// The account to read.
    pub account: Arc<Mutex<Account>>,
}

impl FromRef<AppState> for AccountViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            account: state.account.clone(),
        }
    }
}

/// A route handler for reading the account without changing it.
pub async fn get_account_endpoint(State(state): State<AccountViewState>) -> impl IntoResponse {
    let account = match state.account.lock() {
        Ok(account) => account,
        Err(error) => {
            tracing::error!("Could not acquire account lock: {error}");
            return Error::AccountLock.into_response();
        }
    };

    (StatusCode::OK, Json(AccountResponse::from(&*account))).into_response()
}
