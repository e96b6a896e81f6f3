use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cedarboard_core::{ActionId, DomainResult, ResourceId, RoleId, UserId};
use cedarboard_rbac::{PolicyStore, Resource, Role, RoleUpdate, Toggle, User, UserUpdate};

/// Shared application state: the policy store behind its lock.
///
/// Handlers receive this via `Extension`. It is the only write surface over
/// the store: views never alias the collections directly, and render paths
/// read a full [`snapshot`](AppServices::snapshot).
#[derive(Debug)]
pub struct AppServices {
    store: RwLock<PolicyStore>,
}

impl AppServices {
    pub fn new(store: PolicyStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    // A poisoned lock only means another handler panicked mid-request; every
    // mutation leaves the collections consistent, so the state is reusable.
    fn read(&self) -> RwLockReadGuard<'_, PolicyStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PolicyStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Full copy of the current collections for render paths.
    pub fn snapshot(&self) -> PolicyStore {
        self.read().snapshot()
    }

    pub fn roles_add(&self, role: Role) -> DomainResult<()> {
        self.write().add_role(role)
    }

    pub fn roles_update(&self, id: &RoleId, update: RoleUpdate) -> bool {
        self.write().update_role(id, update)
    }

    pub fn roles_delete(&self, id: &RoleId) -> bool {
        self.write().delete_role(id)
    }

    pub fn resources_add(&self, resource: Resource) -> DomainResult<()> {
        self.write().add_resource(resource)
    }

    pub fn resources_delete(&self, id: &ResourceId) -> bool {
        self.write().delete_resource(id)
    }

    pub fn users_add(&self, user: User) -> DomainResult<()> {
        self.write().add_user(user)
    }

    pub fn users_update(&self, id: &UserId, update: UserUpdate) -> bool {
        self.write().update_user(id, update)
    }

    pub fn users_delete(&self, id: &UserId) -> bool {
        self.write().delete_user(id)
    }

    pub fn permission_toggle(
        &self,
        role_id: RoleId,
        resource_id: ResourceId,
        action_id: ActionId,
    ) -> Toggle {
        self.write().toggle_permission(role_id, resource_id, action_id)
    }
}
