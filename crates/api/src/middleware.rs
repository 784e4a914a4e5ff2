//! Access gate: bearer-token extraction and verification.
//!
//! Rejects before any store access; on success it only attaches the
//! verified identity to the request. No logging, no rate limiting, no
//! lockout here.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use bookshelf_auth::TokenVerifier;

use crate::app::errors;
use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<dyn TokenVerifier>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = match extract_bearer(req.headers()) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    let claims = match state.tokens.verify(token) {
        Ok(c) => c,
        Err(e) => return errors::json_error(StatusCode::UNAUTHORIZED, e.to_string()),
    };

    req.extensions_mut().insert(CurrentUser::new(claims.username));

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let unauthorized = || errors::json_error(StatusCode::UNAUTHORIZED, "Authorization token missing");

    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(unauthorized)?;

    let header = header.to_str().map_err(|_| unauthorized())?;

    let token = header.strip_prefix("Bearer ").ok_or_else(unauthorized)?.trim();
    if token.is_empty() {
        return Err(unauthorized());
    }

    Ok(token)
}
