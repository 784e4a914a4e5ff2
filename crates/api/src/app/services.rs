//! Store and token-service wiring shared by handlers.

use std::sync::Arc;

use bookshelf_auth::TokenKeys;
use bookshelf_store::{BookStore, CredentialStore, InMemoryBookStore, InMemoryCredentialStore};

/// Handles every route needs: the two stores and the token key material.
///
/// Stores are trait objects so a document-database backend can replace the
/// in-memory ones without touching the handlers.
pub struct AppServices {
    pub users: Arc<dyn CredentialStore>,
    pub books: Arc<dyn BookStore>,
    pub tokens: Arc<TokenKeys>,
}

impl AppServices {
    pub fn in_memory(tokens: Arc<TokenKeys>) -> Self {
        Self {
            users: Arc::new(InMemoryCredentialStore::new()),
            books: Arc::new(InMemoryBookStore::new()),
            tokens,
        }
    }
}
