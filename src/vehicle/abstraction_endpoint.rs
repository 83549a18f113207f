//! Defines the endpoint for the abstraction demo.
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::vehicle::{Car, Vehicle};

/// The JSON body carrying a single human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The message text.
    pub message: String,
}

/// A route handler that starts a car through the abstract vehicle interface.
///
/// The caller only sees the capability set of a vehicle, not the concrete
/// car behind it.
pub async fn get_abstraction() -> impl IntoResponse {
    let vehicle: Box<dyn Vehicle> = Box::new(Car::new("Toyota"));

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: vehicle.start(),
        }),
    )
        .into_response()
}
