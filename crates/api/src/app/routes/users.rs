use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde_json::json;

use bookshelf_core::DomainError;

use crate::app::errors::ApiResult;
use crate::app::services::AppServices;
use crate::context::CurrentUser;

/// `GET /user` — profile of the asserted identity, password excluded.
pub async fn profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult {
    let record = services
        .users
        .find_by_username(user.username())?
        .ok_or_else(|| DomainError::not_found("User not found"))?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "User found",
            "user": record.profile(),
        })),
    )
        .into_response())
}
