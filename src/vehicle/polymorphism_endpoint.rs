//! Defines the endpoint for the polymorphism demo.
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::vehicle::{Car, Motorcycle, Vehicle};

/// A route handler that starts a mixed fleet of vehicles.
///
/// Every vehicle is started through the same trait object call, and each
/// variant answers with its own start procedure. The response preserves the
/// order of the fleet.
pub async fn get_polymorphism() -> impl IntoResponse {
    let fleet: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new("Mazda")),
        Box::new(Motorcycle::new("Honda")),
        Box::new(Car::new("Kia")),
        Box::new(Motorcycle::new("Suzuki")),
    ];

    let results: Vec<String> = fleet.iter().map(|vehicle| vehicle.start()).collect();

    (StatusCode::OK, Json(results)).into_response()
}
