//! An educational REST API that demonstrates four object-oriented
//! programming ideas with two toy domains: a bank account whose balance can
//! only be changed through validated operations, and a small fleet of
//! vehicles that share one capability set.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod account;
mod app_state;
mod endpoints;
mod health;
mod not_found;
mod routing;
mod vehicle;

pub use account::Account;
pub use app_state::AppState;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The caller supplied an argument that breaks an account rule, such as
    /// a non-positive amount or a negative opening balance.
    ///
    /// The payload is the rule text and is safe to show to the client.
    #[error("{0}")]
    InvalidArgument(String),

    /// A withdrawal asked for more money than the account holds.
    #[error("insufficient funds: requested {requested} but only {available} is available")]
    InsufficientFunds {
        /// The amount the caller tried to withdraw.
        requested: Decimal,
        /// The balance the account held at the time.
        available: Decimal,
    },

    /// Could not acquire the account lock.
    ///
    /// The cause should only be logged for debugging on the server. When
    /// communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server
    /// error.
    #[error("could not acquire the account lock")]
    AccountLock,
}

/// The JSON body returned for requests that could not be fulfilled.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human readable description of what went wrong.
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            Error::InvalidArgument(_) | Error::InsufficientFunds { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            // Not intended to be shown to the client.
            Error::AccountLock => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "an unexpected error occurred, check the server logs for more details".to_owned(),
            ),
        };

        (status_code, Json(ErrorResponse { message })).into_response()
    }
}
