use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::ErrorResponse;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "the requested resource could not be found".to_owned(),
        }),
    )
        .into_response()
}
