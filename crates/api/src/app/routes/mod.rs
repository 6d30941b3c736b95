use axum::{Router, routing::get};

pub mod items;
pub mod orders;
pub mod reports;
pub mod system;

/// Router for every page and form endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/info", get(system::info))
        .merge(items::router())
        .merge(orders::router())
        .merge(reports::router())
}
