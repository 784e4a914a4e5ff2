use serde::{Deserialize, Serialize};

/// Token claims model (transport-agnostic).
///
/// The only claim this system carries is the asserted username. No
/// issued-at, no expiry: verification checks the signature and nothing
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token asserts.
    pub username: String,
}

impl Claims {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// A claims set with no asserted identity is never acceptable.
    pub fn is_empty(&self) -> bool {
        self.username.trim().is_empty()
    }
}
