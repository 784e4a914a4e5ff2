//! HTTP API: router, access gate, and request/response mapping.
//!
//! Known weaknesses of the system this serves, preserved on purpose and
//! documented rather than silently fixed:
//! - passwords are stored and compared in plain text;
//! - tokens never expire;
//! - registration runs existence checks before insert (a race window);
//! - `GET /one-book/{id}` does not check the caller against the owner.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod telemetry;
