//! Defines the endpoint for the inheritance demo.
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::vehicle::{Car, Motorcycle, Vehicle};

/// A route handler that describes one vehicle of each variant.
///
/// Both variants share the describe capability but answer with their own
/// wording, so the response shows which parts of the behaviour are
/// inherited and which are overridden.
pub async fn get_inheritance() -> impl IntoResponse {
    let descriptions = vec![
        Car::new("Ford").describe(),
        Motorcycle::new("Yamaha").describe(),
    ];

    (StatusCode::OK, Json(descriptions)).into_response()
}
