// src/bin/api_server.rs

use library_catalog::infra::config;
use library_catalog::transport;
use library_catalog::{CatalogService, GoogleBooksClient, InMemoryCatalogStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config::rust_log()))
        .init();

    // --- Metadata Lookup Initialization ---
    let lookup = GoogleBooksClient::from_env()?;
    tracing::info!(endpoint = lookup.endpoint(), "Metadata lookup configured");

    // --- Catalog Initialization ---
    // In-memory only: the catalog starts empty on every run.
    let catalog = CatalogService::new(Box::new(InMemoryCatalogStore::new()), Arc::new(lookup));
    let app_state = transport::http::AppState {
        catalog: Arc::new(catalog),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("API server listening on http://{}", listener.local_addr()?);
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received, catalog contents are discarded");
        })
        .await?;

    Ok(())
}
