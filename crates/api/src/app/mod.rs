//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: inventory operations over the item repository
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: form payloads and their mapping to domain types
//! - `pages.rs`: HTML rendering
//! - `flash.rs`: one-shot notices across redirects
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use barstock_infra::{ItemRepository, SqliteItemRepository, connect, ensure_schema};

use crate::config::AppConfig;

pub mod dto;
pub mod errors;
pub mod flash;
pub mod pages;
pub mod routes;
pub mod services;

/// Open the database, bootstrap the schema and build the full router
/// (public entrypoint used by `main.rs`).
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let pool = connect(&config.database).await?;
    ensure_schema(&pool).await?;

    let repo: Arc<dyn ItemRepository> = Arc::new(SqliteItemRepository::new(pool));
    Ok(build_router(services::AppServices::new(repo)))
}

/// Router over an already-wired service layer.
pub fn build_router(services: services::AppServices) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(Arc::new(services))),
    )
}
