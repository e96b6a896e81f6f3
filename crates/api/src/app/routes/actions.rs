use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::app::dto;
use crate::app::services::AppServices;

/// The action catalog is read-only: no mutating routes exist.
pub fn router() -> Router {
    Router::new().route("/", get(list_actions))
}

pub async fn list_actions(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    let items = snapshot
        .actions()
        .iter()
        .map(dto::action_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
