use crate::app::catalog_service::CatalogService;
use crate::domain::book::Book;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AddBookRequest {
    pub title: String,
    /// Defaults to "Unknown" when empty.
    #[serde(default)]
    pub author: Option<String>,
    /// A 13-character identifier is generated when empty.
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    /// Hex or CSS color for the spine.
    #[serde(default)]
    pub spine_color: Option<String>,
}

impl AddBookRequest {
    pub fn into_book(self) -> Book {
        let mut book = Book::titled(self.title.trim())
            .with_author(self.author.unwrap_or_default().trim())
            .with_isbn(self.isbn.unwrap_or_default().trim())
            .with_summary(self.summary.unwrap_or_default());
        book.cover_image_url = self.cover_image_url.filter(|u| !u.trim().is_empty());
        book.spine_color = self.spine_color.filter(|c| !c.trim().is_empty());
        book
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LookupAddRequest {
    pub title: String,
    /// ISBN of the search result the user picked, if any.
    #[serde(default)]
    pub isbn: Option<String>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Free-text query.
    #[serde(default)]
    pub query: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct AddBookResponse {
    pub inserted: bool,
    pub book: Book,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct RemoveBookResponse {
    pub isbn: String,
    pub removed: bool,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::err(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}

pub fn json_400(message: impl Into<String>) -> (StatusCode, Json<ApiResponse>) {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::err(message)))
}
