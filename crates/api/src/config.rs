//! Environment-provided configuration, loaded once at startup.

/// Process configuration.
///
/// The token secret lives here and is handed to [`bookshelf_auth::TokenKeys`]
/// at construction; nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the server binds, e.g. `0.0.0.0:3000`.
    pub listen_addr: String,

    /// Shared secret for signing and verifying tokens.
    pub token_secret: String,
}

impl AppConfig {
    /// Read `PORT` and `JWT_SECRET` from the environment.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        let token_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        Self {
            listen_addr: format!("0.0.0.0:{port}"),
            token_secret,
        }
    }
}
