//! HTTP application wiring (axum router + service wiring).
//!
//! - `services.rs`: store and token-service wiring shared by handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and presence validation
//! - `errors.rs`: consistent `{"message": ...}` error envelopes

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use bookshelf_auth::{TokenKeys, TokenVerifier};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(token_secret: &str) -> Router {
    let tokens = Arc::new(TokenKeys::new(token_secret.as_bytes()));
    let auth_state = middleware::AuthState {
        tokens: tokens.clone() as Arc<dyn TokenVerifier>,
    };

    let services = Arc::new(services::AppServices::in_memory(tokens));

    // Protected routes: everything behind the access gate.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    // Browser-facing API: answer cross-origin requests from any origin,
    // as the system always has.
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(Extension(services)),
        )
}
