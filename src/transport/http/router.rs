use crate::domain::book::{Book, SearchResult};
use crate::transport::http::handlers::{books, health, lookup};
use crate::transport::http::types::{
    AddBookRequest, AddBookResponse, ApiResponse, LookupAddRequest, RemoveBookResponse,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        books::list_books_handler,
        books::add_book_handler,
        books::get_book_handler,
        books::remove_book_handler,
        books::search_books_handler,
        lookup::lookup_search_handler,
        lookup::lookup_add_handler
    ),
    components(schemas(
        ApiResponse,
        Book,
        SearchResult,
        AddBookRequest,
        AddBookResponse,
        LookupAddRequest,
        RemoveBookResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/books",
            get(books::list_books_handler).post(books::add_book_handler),
        )
        .route(
            "/api/books/:isbn",
            get(books::get_book_handler).delete(books::remove_book_handler),
        )
        .route("/api/search", get(books::search_books_handler))
        .route("/api/lookup", get(lookup::lookup_search_handler))
        .route("/api/lookup/add", post(lookup::lookup_add_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
