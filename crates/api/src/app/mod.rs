//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: the shared policy store behind its lock
//! - `routes/`: HTTP routes + handlers (one file per console view)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(services: services::AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(Arc::new(services)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // The console frontend is served from a different origin.
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(middleware::request_id)),
        )
}
