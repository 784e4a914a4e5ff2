//! `bookshelf-store` — persisted user and book records.
//!
//! Store traits plus in-memory implementations. The traits are the seam a
//! document-database backend would plug into; route handlers only ever see
//! the trait objects.

pub mod books;
pub mod credentials;
pub mod error;

pub use books::{BookPatch, BookStore, InMemoryBookStore};
pub use credentials::{CredentialStore, InMemoryCredentialStore};
pub use error::StoreError;
