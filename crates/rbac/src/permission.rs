use serde::{Deserialize, Serialize};

use cedarboard_core::{ActionId, ResourceId, RoleId, ValueObject};

/// A single grant: `role` may perform `action` on `resource`.
///
/// Permissions have no identity of their own; the triple is the value. At
/// most one permission exists per triple: the store's toggle enforces this
/// by presence/absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub role_id: RoleId,
    pub resource_id: ResourceId,
    pub action_id: ActionId,
}

impl Permission {
    pub fn new(role_id: RoleId, resource_id: ResourceId, action_id: ActionId) -> Self {
        Self {
            role_id,
            resource_id,
            action_id,
        }
    }

    pub fn matches(&self, role_id: &RoleId, resource_id: &ResourceId, action_id: &ActionId) -> bool {
        self.role_id == *role_id && self.resource_id == *resource_id && self.action_id == *action_id
    }
}

impl ValueObject for Permission {}
