//! Book CRUD. Mutating operations scope their store call by
//! `(asserted owner, id)`; the lookup-by-id route does not.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use bookshelf_core::DomainError;

use crate::app::dto;
use crate::app::errors::ApiResult;
use crate::app::services::AppServices;
use crate::context::CurrentUser;

/// `GET /books` — every book owned by the asserted identity.
pub async fn list_books(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult {
    let books = services.books.list_by_owner(user.username())?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Books fetched successfully",
            "books": books,
        })),
    )
        .into_response())
}

/// `PUT /books` — create a book owned by the asserted identity.
pub async fn add_book(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    body: Option<Json<dto::AddBookRequest>>,
) -> ApiResult {
    let Json(body) = body.unwrap_or_default();
    let book = body.into_book(user.username())?;

    services.books.insert(book.clone())?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Book added successfully",
            "book": book,
        })),
    )
        .into_response())
}

/// `DELETE /books` — delete the book matching both the asserted identity
/// and the id from the body. A valid id owned by someone else deletes
/// nothing and reports not found.
pub async fn delete_book(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    body: Option<Json<dto::DeleteBookRequest>>,
) -> ApiResult {
    let Json(body) = body.unwrap_or_default();
    let id = dto::parse_book_id(body.book_id.as_deref())?;

    let deleted = services.books.delete(user.username(), &id)?;
    if !deleted {
        return Err(DomainError::not_found("Book not found").into());
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Book deleted successfully" })),
    )
        .into_response())
}

/// `PUT /update-book/{bookId}` — partial update of rating/review, scoped
/// to `(owner, id)`.
pub async fn update_book(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(book_id): Path<String>,
    body: Option<Json<dto::UpdateBookRequest>>,
) -> ApiResult {
    let id = dto::parse_book_id(Some(&book_id))?;
    let Json(body) = body.unwrap_or_default();
    let patch = body.into_patch()?;

    let updated = services.books.update(user.username(), &id, patch)?;
    if !updated {
        return Err(DomainError::not_found("Book not found").into());
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Book updated successfully" })),
    )
        .into_response())
}

/// `GET /one-book/{bookId}` — lookup by id with **no owner scoping**.
///
/// Any authenticated identity can read any book it has an id for. This is
/// a known access-control gap of the system, preserved deliberately; the
/// black-box tests pin it so a silent "fix" shows up as a failure.
pub async fn get_one_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(book_id): Path<String>,
) -> ApiResult {
    let id = dto::parse_book_id(Some(&book_id))?;

    let book = services
        .books
        .find(&id)?
        .ok_or_else(|| DomainError::not_found("Book not found"))?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Book found",
            "book": book,
        })),
    )
        .into_response())
}
