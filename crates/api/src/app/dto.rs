//! Request DTOs and presence validation.
//!
//! Every field arrives as an `Option` so an absent body or a missing field
//! maps to the `"All fields are required"` envelope instead of a framework
//! rejection. Presence means present *and* non-empty for strings, matching
//! how the routes have always treated blank input.

use serde::Deserialize;

use bookshelf_core::{Book, BookId, DomainError, User};
use bookshelf_store::BookPatch;

const MISSING_FIELDS: &str = "All fields are required";

fn required(field: Option<String>) -> Result<String, DomainError> {
    match field {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(DomainError::validation(MISSING_FIELDS)),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn into_user(self) -> Result<User, DomainError> {
        Ok(User {
            name: required(self.name)?,
            username: required(self.username)?,
            email: required(self.email)?,
            password: required(self.password)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn into_credentials(self) -> Result<(String, String), DomainError> {
        Ok((required(self.username)?, required(self.password)?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddBookRequest {
    pub name: Option<String>,
    pub pages: Option<i64>,
    pub author: Option<String>,
    pub genre: Option<Vec<String>>,
    pub rating: Option<i64>,
    pub review: Option<String>,
}

impl AddBookRequest {
    /// Validate presence of the required fields and build the owned record.
    pub fn into_book(self, owner: &str) -> Result<Book, DomainError> {
        let missing = || DomainError::validation(MISSING_FIELDS);

        Ok(Book {
            id: BookId::new(),
            name: required(self.name)?,
            pages: self.pages.ok_or_else(missing)?,
            author: required(self.author)?,
            genre: self.genre.ok_or_else(missing)?,
            username: owner.to_string(),
            rating: self.rating.ok_or_else(missing)?,
            review: self.review,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBookRequest {
    pub book_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookRequest {
    pub rating: Option<i64>,
    pub review: Option<String>,
}

impl UpdateBookRequest {
    pub fn into_patch(self) -> Result<BookPatch, DomainError> {
        let patch = BookPatch {
            rating: self.rating,
            review: self.review,
        };
        if patch.is_empty() {
            return Err(DomainError::validation("Nothing to update"));
        }
        Ok(patch)
    }
}

/// Parse a book id supplied by the caller (path segment or body field).
pub fn parse_book_id(raw: Option<&str>) -> Result<BookId, DomainError> {
    let raw = raw.ok_or_else(|| DomainError::validation("Book id is required"))?;
    if raw.is_empty() {
        return Err(DomainError::validation("Book id is required"));
    }
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_requires_every_field() {
        let body = RegisterRequest {
            name: Some("A".into()),
            username: Some("alice".into()),
            email: None,
            password: Some("p1".into()),
        };
        assert!(matches!(body.into_user(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn register_rejects_blank_strings() {
        let body = RegisterRequest {
            name: Some("A".into()),
            username: Some("".into()),
            email: Some("a@x.com".into()),
            password: Some("p1".into()),
        };
        assert!(matches!(body.into_user(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn add_book_review_is_optional() {
        let body = AddBookRequest {
            name: Some("Dune".into()),
            pages: Some(412),
            author: Some("Herbert".into()),
            genre: Some(vec!["scifi".into()]),
            rating: Some(5),
            review: None,
        };

        let book = body.into_book("alice").unwrap();
        assert_eq!(book.username, "alice");
        assert_eq!(book.review, None);
    }

    #[test]
    fn add_book_missing_rating_rejected() {
        let body = AddBookRequest {
            name: Some("Dune".into()),
            pages: Some(412),
            author: Some("Herbert".into()),
            genre: Some(vec!["scifi".into()]),
            rating: None,
            review: None,
        };
        assert!(matches!(
            body.into_book("alice"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn update_with_no_fields_is_nothing_to_update() {
        let err = UpdateBookRequest::default().into_patch().unwrap_err();
        assert_eq!(err, DomainError::validation("Nothing to update"));
    }

    #[test]
    fn book_id_presence_and_shape() {
        assert!(parse_book_id(None).is_err());
        assert!(parse_book_id(Some("")).is_err());
        assert!(parse_book_id(Some("not-a-uuid")).is_err());
        assert!(parse_book_id(Some(&BookId::new().to_string())).is_ok());
    }
}
