use axum::{
    body::HttpBody,
    routing::get,
    BoxError,
    Router,
};
use crate::catalog::controller::{add_book, find_book_by_id, list_books, remove_book, update_book};
use crate::core::controller::AppState;

pub mod command;
pub mod controller;
pub mod domain;
pub mod factory;

pub fn router<B>(state: AppState) -> Router<(), B>
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    Router::new()
        .route("/books",
               get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state)
}
