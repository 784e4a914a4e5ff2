use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bookshelf_core::DomainError;

/// Map a domain error to its envelope.
///
/// Every handler failure is a 400; the access gate emits its own 401
/// before a handler ever runs. No internal detail beyond the
/// human-readable message leaves the process.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, err.to_string())
}

/// Error half of a handler result; converts into the envelope response.
pub struct ApiError(pub DomainError);

/// Result alias used by every handler.
pub type ApiResult = Result<axum::response::Response, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        domain_error_to_response(self.0)
    }
}

impl<E> From<E> for ApiError
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}
