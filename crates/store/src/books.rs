//! Book store: owner-scoped mutation, unscoped lookup.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bookshelf_core::{Book, BookId};

use crate::error::StoreError;

/// Partial update of a book's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub rating: Option<i64>,
    pub review: Option<String>,
}

impl BookPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.review.is_none()
    }
}

/// Persisted book records.
///
/// `update` and `delete` filter on `(owner, id)` and report whether a
/// record was affected; a valid id with the wrong owner affects nothing.
/// `find` is deliberately unscoped: it backs the get-one-book route, whose
/// missing owner check is a documented gap of this system.
pub trait BookStore: Send + Sync {
    fn insert(&self, book: Book) -> Result<(), StoreError>;
    fn list_by_owner(&self, owner: &str) -> Result<Vec<Book>, StoreError>;
    fn find(&self, id: &BookId) -> Result<Option<Book>, StoreError>;
    fn update(&self, owner: &str, id: &BookId, patch: BookPatch) -> Result<bool, StoreError>;
    fn delete(&self, owner: &str, id: &BookId) -> Result<bool, StoreError>;
}

impl<S> BookStore for Arc<S>
where
    S: BookStore + ?Sized,
{
    fn insert(&self, book: Book) -> Result<(), StoreError> {
        (**self).insert(book)
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<Book>, StoreError> {
        (**self).list_by_owner(owner)
    }

    fn find(&self, id: &BookId) -> Result<Option<Book>, StoreError> {
        (**self).find(id)
    }

    fn update(&self, owner: &str, id: &BookId, patch: BookPatch) -> Result<bool, StoreError> {
        (**self).update(owner, id, patch)
    }

    fn delete(&self, owner: &str, id: &BookId) -> Result<bool, StoreError> {
        (**self).delete(owner, id)
    }
}

/// In-memory book store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    inner: RwLock<HashMap<BookId, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Operation("book store lock poisoned".to_string())
}

impl BookStore for InMemoryBookStore {
    fn insert(&self, book: Book) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(book.id, book);
        Ok(())
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<Book>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut books: Vec<Book> = map
            .values()
            .filter(|b| b.username == owner)
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; keep listings stable.
        books.sort_by_key(|b| b.id);
        Ok(books)
    }

    fn find(&self, id: &BookId) -> Result<Option<Book>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(id).cloned())
    }

    fn update(&self, owner: &str, id: &BookId, patch: BookPatch) -> Result<bool, StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;

        let Some(book) = map.get_mut(id).filter(|b| b.username == owner) else {
            return Ok(false);
        };

        if let Some(rating) = patch.rating {
            book.rating = rating;
        }
        if let Some(review) = patch.review {
            book.review = Some(review);
        }
        Ok(true)
    }

    fn delete(&self, owner: &str, id: &BookId) -> Result<bool, StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;

        if map.get(id).is_some_and(|b| b.username == owner) {
            map.remove(id);
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(owner: &str, name: &str) -> Book {
        Book {
            id: BookId::new(),
            name: name.to_string(),
            pages: 412,
            author: "Herbert".to_string(),
            genre: vec!["scifi".to_string()],
            username: owner.to_string(),
            rating: 5,
            review: None,
        }
    }

    #[test]
    fn listings_are_owner_isolated() {
        let store = InMemoryBookStore::new();
        store.insert(book("alice", "Dune")).unwrap();
        store.insert(book("alice", "Messiah")).unwrap();
        store.insert(book("bob", "Solaris")).unwrap();

        let alices = store.list_by_owner("alice").unwrap();
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|b| b.username == "alice"));

        assert!(store.list_by_owner("carol").unwrap().is_empty());
    }

    #[test]
    fn delete_refuses_wrong_owner() {
        let store = InMemoryBookStore::new();
        let b = book("alice", "Dune");
        let id = b.id;
        store.insert(b).unwrap();

        assert!(!store.delete("bob", &id).unwrap());
        assert!(store.find(&id).unwrap().is_some());

        assert!(store.delete("alice", &id).unwrap());
        assert!(store.find(&id).unwrap().is_none());
    }

    #[test]
    fn update_refuses_wrong_owner() {
        let store = InMemoryBookStore::new();
        let b = book("alice", "Dune");
        let id = b.id;
        store.insert(b).unwrap();

        let patch = BookPatch {
            rating: Some(1),
            review: None,
        };
        assert!(!store.update("bob", &id, patch).unwrap());
        assert_eq!(store.find(&id).unwrap().unwrap().rating, 5);
    }

    #[test]
    fn update_applies_exactly_the_given_subset() {
        let store = InMemoryBookStore::new();
        let b = book("alice", "Dune");
        let id = b.id;
        store.insert(b).unwrap();

        let patch = BookPatch {
            rating: None,
            review: Some("spice overload".to_string()),
        };
        assert!(store.update("alice", &id, patch).unwrap());

        let updated = store.find(&id).unwrap().unwrap();
        assert_eq!(updated.rating, 5);
        assert_eq!(updated.review.as_deref(), Some("spice overload"));
    }

    #[test]
    fn update_missing_book_reports_nothing_affected() {
        let store = InMemoryBookStore::new();
        let patch = BookPatch {
            rating: Some(3),
            review: None,
        };
        assert!(!store.update("alice", &BookId::new(), patch).unwrap());
    }

    #[test]
    fn find_is_unscoped() {
        let store = InMemoryBookStore::new();
        let b = book("alice", "Dune");
        let id = b.id;
        store.insert(b).unwrap();

        // No owner in the filter; any identity can look a book up by id.
        assert!(store.find(&id).unwrap().is_some());
    }

    #[test]
    fn empty_patch_detection() {
        assert!(BookPatch::default().is_empty());
        assert!(
            !BookPatch {
                rating: Some(4),
                review: None
            }
            .is_empty()
        );
    }
}
