use serde::Deserialize;

use cedarboard_core::Entity;
use cedarboard_rbac::{Action, Permission, PolicyStore, Resource, Role, User};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateResourceRequest {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct TogglePermissionRequest {
    pub role_id: String,
    pub resource_id: String,
    pub action_id: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn role_to_json(role: &Role) -> serde_json::Value {
    serde_json::json!({
        "id": role.id.as_str(),
        "name": role.name,
        "description": role.description,
    })
}

pub fn action_to_json(action: &Action) -> serde_json::Value {
    serde_json::json!({
        "id": action.id.as_str(),
        "name": action.name,
    })
}

pub fn resource_to_json(resource: &Resource) -> serde_json::Value {
    serde_json::json!({
        "id": resource.id.as_str(),
        "name": resource.name,
        "actions": resource.actions.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
    })
}

pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id.as_str(),
        "name": user.name,
        "email": user.email,
        "roles": user.roles.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
    })
}

pub fn permission_to_json(permission: &Permission) -> serde_json::Value {
    serde_json::json!({
        "role_id": permission.role_id.as_str(),
        "resource_id": permission.resource_id.as_str(),
        "action_id": permission.action_id.as_str(),
    })
}

/// The permission matrix: one column per role, grouped rows per resource
/// with one sub-row per action declared on that resource. Cell state is
/// recomputed from the grant collection on every request.
pub fn matrix_to_json(store: &PolicyStore) -> serde_json::Value {
    serde_json::json!({
        "roles": store.roles().iter().map(|role| serde_json::json!({
            "id": role.id.as_str(),
            "name": role.name,
        })).collect::<Vec<_>>(),
        "resources": store.resources().iter().map(|resource| serde_json::json!({
            "id": resource.id.as_str(),
            "name": resource.name,
            "rows": resource.actions.iter().map(|action_id| serde_json::json!({
                "action_id": action_id.as_str(),
                "action_name": store
                    .action(action_id)
                    .map(Entity::display_name)
                    .unwrap_or(action_id.as_str()),
                "cells": store.roles().iter().map(|role| serde_json::json!({
                    "role_id": role.id.as_str(),
                    "granted": store.has_permission(&role.id, &resource.id, action_id),
                })).collect::<Vec<_>>(),
            })).collect::<Vec<_>>(),
        })).collect::<Vec<_>>(),
    })
}
