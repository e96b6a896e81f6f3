use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use cedarboard_core::{RoleId, UserId};
use cedarboard_rbac::{User, UserUpdate};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    if let Err(e) = errors::require_field(&body.name, "name") {
        return errors::domain_error_to_response(e);
    }
    if let Err(e) = errors::require_field(&body.email, "email") {
        return errors::domain_error_to_response(e);
    }

    // Role ids are taken as given; dangling assignments are tolerated.
    let roles = body.roles.into_iter().map(RoleId::new).collect();
    let user = User::new(UserId::from_name(&body.name), body.name, body.email, roles);
    let json = dto::user_to_json(&user);
    if let Err(e) = services.users_add(user) {
        return errors::domain_error_to_response(e);
    }

    (StatusCode::CREATED, Json(json)).into_response()
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    let items = snapshot
        .users()
        .iter()
        .map(dto::user_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    match snapshot.user(&UserId::new(id)) {
        Some(user) => (StatusCode::OK, Json(dto::user_to_json(user))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
    }
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateUserRequest>,
) -> axum::response::Response {
    if let Some(name) = &body.name {
        if let Err(e) = errors::require_field(name, "name") {
            return errors::domain_error_to_response(e);
        }
    }
    if let Some(email) = &body.email {
        if let Err(e) = errors::require_field(email, "email") {
            return errors::domain_error_to_response(e);
        }
    }

    let id = UserId::new(id);
    let update = UserUpdate {
        name: body.name,
        email: body.email,
        roles: body
            .roles
            .map(|roles| roles.into_iter().map(RoleId::new).collect()),
    };
    if !services.users_update(&id, update) {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found");
    }

    let snapshot = services.snapshot();
    match snapshot.user(&id) {
        Some(user) => (StatusCode::OK, Json(dto::user_to_json(user))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if !services.users_delete(&UserId::new(id)) {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found");
    }
    StatusCode::NO_CONTENT.into_response()
}
