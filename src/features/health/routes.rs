//! Health check route

use axum::{routing::get, Router};

use crate::core::config::ResolverStrategy;
use crate::features::health::handlers;

pub fn routes(strategy: ResolverStrategy) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .with_state(strategy)
}
