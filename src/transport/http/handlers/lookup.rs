use crate::transport::http::handlers::books::add_outcome_response;
use crate::transport::http::handlers::common::require_title;
use crate::transport::http::types::{json_422, ApiResponse, AppState, LookupAddRequest, SearchQuery};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/lookup",
    params(SearchQuery),
    responses(
        (status = 200, description = "Candidates from the external book-search API (empty on upstream failure)", body = ApiResponse)
    )
)]
pub async fn lookup_search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let results = state.catalog.search_remote(params.query.trim()).await;
    (StatusCode::OK, Json(ApiResponse::ok(serde_json::json!(results))))
}

#[utoipa::path(
    post,
    path = "/api/lookup/add",
    request_body = LookupAddRequest,
    responses(
        (status = 201, description = "Book added with looked-up details", body = ApiResponse),
        (status = 200, description = "ISBN already catalogued; existing book returned", body = ApiResponse),
        (status = 400, description = "Missing title", body = ApiResponse),
        (status = 409, description = "No unused ISBN could be generated", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn lookup_add_handler(
    State(state): State<AppState>,
    request: Result<Json<LookupAddRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"title\": \"...\", \"isbn\"?: \"...\"}").into_response(),
    };
    let title = match require_title(&request.title) {
        Ok(t) => t,
        Err(resp) => return resp.into_response(),
    };

    let outcome = state
        .catalog
        .add_from_lookup(title, request.isbn.as_deref())
        .await;
    add_outcome_response(outcome).into_response()
}
