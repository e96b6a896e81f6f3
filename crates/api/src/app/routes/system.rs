use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Entity counts for the dashboard stat tiles.
pub async fn summary(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let snapshot = services.snapshot();
    Json(serde_json::json!({
        "roles": snapshot.roles().len(),
        "users": snapshot.users().len(),
        "permissions": snapshot.permissions().len(),
    }))
}
