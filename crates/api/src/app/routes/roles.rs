use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use cedarboard_core::RoleId;
use cedarboard_rbac::{Role, RoleUpdate};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_role).get(list_roles))
        .route("/:id", get(get_role).patch(update_role).delete(delete_role))
}

pub async fn create_role(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateRoleRequest>,
) -> axum::response::Response {
    if let Err(e) = errors::require_field(&body.name, "name") {
        return errors::domain_error_to_response(e);
    }

    let role = Role::new(RoleId::from_name(&body.name), body.name, body.description);
    let json = dto::role_to_json(&role);
    if let Err(e) = services.roles_add(role) {
        return errors::domain_error_to_response(e);
    }

    (StatusCode::CREATED, Json(json)).into_response()
}

pub async fn list_roles(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    let items = snapshot
        .roles()
        .iter()
        .map(dto::role_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_role(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    match snapshot.role(&RoleId::new(id)) {
        Some(role) => (StatusCode::OK, Json(dto::role_to_json(role))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "role not found"),
    }
}

pub async fn update_role(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateRoleRequest>,
) -> axum::response::Response {
    if let Some(name) = &body.name {
        if let Err(e) = errors::require_field(name, "name") {
            return errors::domain_error_to_response(e);
        }
    }

    let id = RoleId::new(id);
    let update = RoleUpdate {
        name: body.name,
        description: body.description,
    };
    if !services.roles_update(&id, update) {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "role not found");
    }

    let snapshot = services.snapshot();
    match snapshot.role(&id) {
        Some(role) => (StatusCode::OK, Json(dto::role_to_json(role))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "role not found"),
    }
}

pub async fn delete_role(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if !services.roles_delete(&RoleId::new(id)) {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "role not found");
    }
    StatusCode::NO_CONTENT.into_response()
}
