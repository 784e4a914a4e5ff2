//! User account record.

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// # Invariants
/// - `username` and `email` are unique across the credential store.
/// - Users are created at registration and never updated or deleted.
///
/// The password is stored and compared verbatim. That reproduces the
/// documented behavior of the system; it is a known weakness, not an
/// invitation to store real credentials here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Public profile view of the account: everything except the password.
    pub fn profile(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "username": self.username,
            "email": self.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_excludes_password() {
        let user = User {
            name: "Alice".into(),
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "p1".into(),
        };

        let profile = user.profile();
        assert_eq!(profile["username"], "alice");
        assert!(profile.get("password").is_none());
    }
}
