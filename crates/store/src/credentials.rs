//! Credential store: registered user records.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bookshelf_core::User;

use crate::error::StoreError;

/// Persisted account records, keyed by username.
///
/// Routes perform their own existence checks before insert (that
/// check-then-insert window is a documented property of the system); the
/// insert-time duplicate rejection here is belt-level hardening at the
/// store boundary.
pub trait CredentialStore: Send + Sync {
    fn insert(&self, user: User) -> Result<(), StoreError>;
    fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
    fn username_exists(&self, username: &str) -> Result<bool, StoreError>;
    fn email_exists(&self, email: &str) -> Result<bool, StoreError>;
}

impl<S> CredentialStore for Arc<S>
where
    S: CredentialStore + ?Sized,
{
    fn insert(&self, user: User) -> Result<(), StoreError> {
        (**self).insert(user)
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        (**self).find_by_username(username)
    }

    fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        (**self).username_exists(username)
    }

    fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        (**self).email_exists(email)
    }
}

/// In-memory credential store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    inner: RwLock<HashMap<String, User>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, User>>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Operation("credential store lock poisoned".to_string()))
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::Operation("credential store lock poisoned".to_string()))?;

        if map.contains_key(&user.username) {
            return Err(StoreError::Duplicate("Username"));
        }
        if map.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("Email"));
        }

        map.insert(user.username.clone(), user);
        Ok(())
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.get(username).cloned())
    }

    fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.read()?.contains_key(username))
    }

    fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.read()?.values().any(|u| u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: &str) -> User {
        User {
            name: username.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn insert_and_find() {
        let store = InMemoryCredentialStore::new();
        store.insert(user("alice", "a@x.com")).unwrap();

        let found = store.find_by_username("alice").unwrap().unwrap();
        assert_eq!(found.email, "a@x.com");
        assert_eq!(store.find_by_username("bob").unwrap(), None);
    }

    #[test]
    fn duplicate_username_rejected() {
        let store = InMemoryCredentialStore::new();
        store.insert(user("alice", "a@x.com")).unwrap();

        let err = store.insert(user("alice", "other@x.com")).unwrap_err();
        assert_eq!(err, StoreError::Duplicate("Username"));
    }

    #[test]
    fn duplicate_email_rejected() {
        let store = InMemoryCredentialStore::new();
        store.insert(user("alice", "a@x.com")).unwrap();

        let err = store.insert(user("bob", "a@x.com")).unwrap_err();
        assert_eq!(err, StoreError::Duplicate("Email"));
    }

    #[test]
    fn existence_checks() {
        let store = InMemoryCredentialStore::new();
        store.insert(user("alice", "a@x.com")).unwrap();

        assert!(store.username_exists("alice").unwrap());
        assert!(!store.username_exists("bob").unwrap());
        assert!(store.email_exists("a@x.com").unwrap());
        assert!(!store.email_exists("b@x.com").unwrap());
    }
}
