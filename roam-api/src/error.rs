use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roam_booking::BookingError;
use roam_catalog::TourError;
use roam_rating::ReviewError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Forbidden(String),
    BadRequest(String),
    NotFound(String),
    Unavailable(String),
}

impl ApiError {
    /// Storage faults surface as 503; the repository already carries the
    /// detail.
    pub fn storage(err: roam_core::BoxError) -> Self {
        ApiError::Unavailable(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unavailable(msg) => {
                tracing::error!("Storage unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Storage unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::TourNotFound(_) | BookingError::NotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            BookingError::EmptyContactField { .. }
            | BookingError::InvalidPeopleCount { .. }
            | BookingError::InvalidStatus(_) => ApiError::BadRequest(err.to_string()),
            BookingError::Unavailable(msg) => ApiError::Unavailable(msg),
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::TourNotFound(_) => ApiError::NotFound(err.to_string()),
            ReviewError::InvalidRating(_) => ApiError::BadRequest(err.to_string()),
            ReviewError::Unavailable(msg) => ApiError::Unavailable(msg),
        }
    }
}

impl From<TourError> for ApiError {
    fn from(err: TourError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
