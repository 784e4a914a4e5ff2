//! `bookshelf-auth` — token issuing and verification boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage. Tokens are
//! HS256 JWTs over a single `{username}` claim with **no expiry**: once
//! issued, a token is valid for as long as the signing secret stands. That
//! indefinite lifetime is a documented simplification of this system, not
//! an oversight to patch here.

pub mod claims;
pub mod token;

pub use claims::Claims;
pub use token::{TokenError, TokenKeys, TokenVerifier};
