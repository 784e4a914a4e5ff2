//! Book record owned by a single account.

use serde::{Deserialize, Serialize};

use crate::id::BookId;

/// A tracked book.
///
/// # Invariants
/// - `username` is a weak back reference to the owning account; it must
///   equal the identity asserted by the credential used to create, update,
///   or delete the record. Enforced at the route layer through scoped
///   store calls, not here.
/// - Only `rating` and `review` are mutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub pages: i64,
    pub author: String,
    pub genre: Vec<String>,
    pub username: String,
    pub rating: i64,
    pub review: Option<String>,
}
