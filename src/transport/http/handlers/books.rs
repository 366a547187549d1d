use crate::storage::catalog::AddOutcome;
use crate::transport::http::handlers::common::{normalize_isbn, require_title};
use crate::transport::http::types::{
    json_422, AddBookRequest, AddBookResponse, ApiResponse, AppState, RemoveBookResponse,
    SearchQuery,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub(crate) fn add_outcome_response(outcome: AddOutcome) -> (StatusCode, Json<ApiResponse>) {
    let (status, body) = match outcome {
        AddOutcome::Inserted(book) => (StatusCode::CREATED, AddBookResponse { inserted: true, book }),
        AddOutcome::Duplicate(book) => (StatusCode::OK, AddBookResponse { inserted: false, book }),
        AddOutcome::IsbnUnavailable => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::err("No unused ISBN could be generated")),
            )
        }
    };
    (status, Json(ApiResponse::ok(json!(body))))
}

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "Available books ordered by title", body = ApiResponse)
    )
)]
pub async fn list_books_handler(State(state): State<AppState>) -> impl IntoResponse {
    let books = state.catalog.list_available().await;
    (StatusCode::OK, Json(ApiResponse::ok(json!(books))))
}

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = AddBookRequest,
    responses(
        (status = 201, description = "Book added", body = ApiResponse),
        (status = 200, description = "ISBN already catalogued; existing book returned", body = ApiResponse),
        (status = 400, description = "Missing title", body = ApiResponse),
        (status = 409, description = "No unused ISBN could be generated", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn add_book_handler(
    State(state): State<AppState>,
    request: Result<Json<AddBookRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"title\": \"...\", \"author\"?, \"isbn\"?, ...}").into_response(),
    };
    if let Err(resp) = require_title(&request.title) {
        return resp.into_response();
    }

    let outcome = state.catalog.add(request.into_book()).await;
    add_outcome_response(outcome).into_response()
}

#[utoipa::path(
    get,
    path = "/api/books/{isbn}",
    params(
        ("isbn" = String, Path, description = "Catalog ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = ApiResponse),
        (status = 404, description = "No book with this ISBN", body = ApiResponse)
    )
)]
pub async fn get_book_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> impl IntoResponse {
    let isbn = normalize_isbn(&isbn);
    match state.catalog.get_by_isbn(isbn).await {
        Some(book) => (StatusCode::OK, Json(ApiResponse::ok(json!(book)))),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(format!("Book '{}' not found", isbn))),
        ),
    }
}

#[utoipa::path(
    delete,
    path = "/api/books/{isbn}",
    params(
        ("isbn" = String, Path, description = "Catalog ISBN")
    ),
    responses(
        (status = 200, description = "Removal attempted; `removed` reports whether a book matched", body = ApiResponse)
    )
)]
pub async fn remove_book_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> impl IntoResponse {
    let isbn = normalize_isbn(&isbn).to_string();
    let removed = state.catalog.remove(&isbn).await;
    (
        StatusCode::OK,
        Json(ApiResponse::ok(json!(RemoveBookResponse { isbn, removed }))),
    )
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Catalog books whose title or author contains the query", body = ApiResponse)
    )
)]
pub async fn search_books_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let books = state.catalog.search_local(params.query.trim()).await;
    (StatusCode::OK, Json(ApiResponse::ok(json!(books))))
}
