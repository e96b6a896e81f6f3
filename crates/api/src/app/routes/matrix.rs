use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use cedarboard_core::{ActionId, ResourceId, RoleId};
use cedarboard_rbac::Toggle;

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(grid))
        .route("/toggle", post(toggle))
        .route("/permissions", get(list_permissions))
}

/// The roles × (resource, action) grid, recomputed per request.
pub async fn grid(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let snapshot = services.snapshot();
    (StatusCode::OK, Json(dto::matrix_to_json(&snapshot))).into_response()
}

/// Flip a single cell. Ids are taken as given; toggling a triple that no
/// stored entity resolves to still records (or removes) the grant.
pub async fn toggle(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::TogglePermissionRequest>,
) -> axum::response::Response {
    let outcome = services.permission_toggle(
        RoleId::new(body.role_id),
        ResourceId::new(body.resource_id),
        ActionId::new(body.action_id),
    );
    (
        StatusCode::OK,
        Json(serde_json::json!({ "granted": outcome == Toggle::Granted })),
    )
        .into_response()
}

/// Raw grant list, in collection (grant) order.
pub async fn list_permissions(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    let items = snapshot
        .permissions()
        .iter()
        .map(dto::permission_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
