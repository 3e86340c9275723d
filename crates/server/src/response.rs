use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::ApiResponse;
use serde::Serialize;

/// Wrap `result` in the API envelope; the HTTP status mirrors `statusCode`.
pub fn reply<T: Serialize>(status: StatusCode, message: &str, result: Option<T>) -> Response {
    envelope(status, ApiResponse::new(status.as_u16(), message, result))
}

pub fn reply_ok<T: Serialize>(message: &str, result: T) -> Response {
    envelope(StatusCode::OK, ApiResponse::with_result(StatusCode::OK.as_u16(), message, result))
}

pub fn reply_message(status: StatusCode, message: &str) -> Response {
    envelope(status, ApiResponse::<()>::message_only(status.as_u16(), message))
}

fn envelope<T: Serialize>(status: StatusCode, body: ApiResponse<T>) -> Response {
    (status, Json(body)).into_response()
}
