//! Registration and login: the only routes that bypass the access gate.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde_json::json;

use bookshelf_auth::Claims;
use bookshelf_core::DomainError;

use crate::app::dto;
use crate::app::errors::ApiResult;
use crate::app::services::AppServices;

/// `POST /register`
///
/// The username/email existence checks run before the insert, so two
/// concurrent registrations of the same name can both pass them. That race
/// is a documented property of the system; the store's own duplicate
/// rejection narrows it.
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    body: Option<Json<dto::RegisterRequest>>,
) -> ApiResult {
    let Json(body) = body.unwrap_or_default();
    let user = body.into_user()?;

    if services.users.username_exists(&user.username)? {
        return Err(DomainError::conflict("Username already exists").into());
    }
    if services.users.email_exists(&user.email)? {
        return Err(DomainError::conflict("Email already exists").into());
    }

    services.users.insert(user.clone())?;
    let token = services.tokens.issue(&Claims::new(user.username))?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "User registered successfully",
            "token": token,
        })),
    )
        .into_response())
}

/// `POST /login`
///
/// Password comparison is verbatim plain text; a missing user and a wrong
/// password produce the same envelope.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    body: Option<Json<dto::LoginRequest>>,
) -> ApiResult {
    let Json(body) = body.unwrap_or_default();
    let (username, password) = body.into_credentials()?;

    let user = services
        .users
        .find_by_username(&username)?
        .filter(|u| u.password == password)
        .ok_or_else(|| DomainError::auth("Invalid username or password"))?;

    let token = services.tokens.issue(&Claims::new(user.username))?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Login successful",
            "token": token,
        })),
    )
        .into_response())
}
