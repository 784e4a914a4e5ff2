//! `bookshelf-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types (no HTTP, no storage concerns).

pub mod book;
pub mod error;
pub mod id;
pub mod user;

pub use book::Book;
pub use error::{DomainError, DomainResult};
pub use id::BookId;
pub use user::User;
