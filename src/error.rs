/*
 * Responsibility
 * - Application-wide error type rendered as HTTP responses
 * - Body shape is always {"error": "<message>"}
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // One message for every authentication failure, whatever the cause.
    #[error("Invalid or expired token")]
    Unauthorized,

    #[error("Request timed out")]
    RequestTimeout,

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponseBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponseBody {
            error: self.to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}
