//! Backend composition and the top-level router

use axum::{Json, Router, response::Redirect, routing::get};
use database::common::RetryConfig;
use database::postgres::{self, PostgresConfig};
use domain_items::{
    InMemoryItemRepository, ItemRepository, ItemService, OrmItemRepository, SqlItemRepository,
    handlers,
};
use eyre::{OptionExt, WrapErr};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

use crate::config::{Config, RepositoryKind};
use crate::openapi::ApiDoc;

/// Build the repository selected by configuration
///
/// Durable backends connect with retry and verify the `item` table exists
/// before the server starts taking requests.
pub async fn build_repository(config: &Config) -> eyre::Result<Arc<dyn ItemRepository>> {
    info!(backend = %config.repository, "Selecting item repository");

    let repository: Arc<dyn ItemRepository> = match config.repository {
        RepositoryKind::Memory => Arc::new(InMemoryItemRepository::new()),
        RepositoryKind::Sql => {
            let db = connect(config.database.as_ref()).await?;
            Arc::new(SqlItemRepository::new(db))
        }
        RepositoryKind::Orm => {
            let db = connect(config.database.as_ref()).await?;
            Arc::new(OrmItemRepository::new(db))
        }
    };

    Ok(repository)
}

async fn connect(config: Option<&PostgresConfig>) -> eyre::Result<postgres::DatabaseConnection> {
    let config = config
        .cloned()
        .ok_or_eyre("DATABASE_URL is required for durable repositories")?;

    let db = postgres::connect_with_retry(config, RetryConfig::new().with_max_retries(5))
        .await
        .wrap_err("Failed to connect to PostgreSQL")?;

    postgres::check_health_with_query(&db, "SELECT 1 FROM item LIMIT 1")
        .await
        .wrap_err("The item table is not reachable; apply manifests/schema/item.sql")?;

    Ok(db)
}

/// Routes: `/` redirects to `/items`, the items API, and the OpenAPI document
pub fn router(repository: Arc<dyn ItemRepository>) -> Router {
    let service = ItemService::from_shared(repository);

    Router::new()
        .route("/", get(|| async { Redirect::to("/items") }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/items", handlers::router(service))
        .layer(TraceLayer::new_for_http())
}
