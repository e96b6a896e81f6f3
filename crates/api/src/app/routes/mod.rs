use axum::{routing::get, Router};

pub mod actions;
pub mod matrix;
pub mod preview;
pub mod resources;
pub mod roles;
pub mod system;
pub mod users;

/// Router for all console endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/summary", get(system::summary))
        .route("/policy", get(preview::policy_document))
        .nest("/roles", roles::router())
        .nest("/resources", resources::router())
        .nest("/users", users::router())
        .nest("/actions", actions::router())
        .nest("/matrix", matrix::router())
}
