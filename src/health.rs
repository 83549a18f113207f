//! Defines the health check endpoint.
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// The JSON body reporting whether the server is able to serve requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the server is running.
    pub status: String,
    /// The version of the server.
    pub version: String,
}

/// A route handler reporting that the server is up.
pub async fn get_health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }),
    )
        .into_response()
}
