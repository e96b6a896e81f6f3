use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use cedarboard_core::{ActionId, ResourceId};
use cedarboard_rbac::Resource;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_resource).get(list_resources))
        .route("/:id", get(get_resource).delete(delete_resource))
}

pub async fn create_resource(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateResourceRequest>,
) -> axum::response::Response {
    if let Err(e) = errors::require_field(&body.name, "name") {
        return errors::domain_error_to_response(e);
    }

    // Action ids are taken as given; a reference to a non-catalog action is
    // tolerated and rendered by raw id downstream.
    let actions = body.actions.into_iter().map(ActionId::new).collect();
    let resource = Resource::new(ResourceId::from_name(&body.name), body.name, actions);
    let json = dto::resource_to_json(&resource);
    if let Err(e) = services.resources_add(resource) {
        return errors::domain_error_to_response(e);
    }

    (StatusCode::CREATED, Json(json)).into_response()
}

pub async fn list_resources(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    let items = snapshot
        .resources()
        .iter()
        .map(dto::resource_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_resource(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    match snapshot.resource(&ResourceId::new(id)) {
        Some(resource) => (StatusCode::OK, Json(dto::resource_to_json(resource))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "resource not found"),
    }
}

pub async fn delete_resource(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if !services.resources_delete(&ResourceId::new(id)) {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "resource not found");
    }
    StatusCode::NO_CONTENT.into_response()
}
