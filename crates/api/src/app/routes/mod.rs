use axum::{
    Router,
    routing::{get, post, put},
};

pub mod auth;
pub mod books;
pub mod system;
pub mod users;

/// Routes that bypass the access gate: account creation and login.
pub fn public_router() -> Router {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Routes behind the access gate.
pub fn protected_router() -> Router {
    Router::new()
        .route("/user", get(users::profile))
        .route(
            "/books",
            put(books::add_book)
                .get(books::list_books)
                .delete(books::delete_book),
        )
        .route("/update-book/:book_id", put(books::update_book))
        .route("/one-book/:book_id", get(books::get_one_book))
}
