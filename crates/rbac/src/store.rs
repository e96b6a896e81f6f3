//! In-memory policy store: the single owner of all RBAC collections.

use cedarboard_core::{
    find_by_id, ActionId, DomainError, DomainResult, ResourceId, RoleId, UserId,
};

use crate::{action, Action, Permission, Resource, Role, RoleUpdate, User, UserUpdate};

/// Outcome of a permission toggle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Toggle {
    Granted,
    Revoked,
}

/// In-memory collections of roles, actions, resources, users and grants.
///
/// Collections keep insertion order; the policy generator and the matrix
/// both depend on it. All writes go through the methods below, and render
/// paths work from a [`snapshot`](PolicyStore::snapshot), so readers never
/// observe a half-applied cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyStore {
    roles: Vec<Role>,
    actions: Vec<Action>,
    resources: Vec<Resource>,
    users: Vec<User>,
    permissions: Vec<Permission>,
}

impl PolicyStore {
    /// Empty store carrying the built-in action catalog.
    pub fn new() -> Self {
        Self {
            roles: Vec::new(),
            actions: action::catalog(),
            resources: Vec::new(),
            users: Vec::new(),
            permissions: Vec::new(),
        }
    }

    /// Demo dataset the console boots with for first-run exploration.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        store.roles = vec![
            Role::new(
                RoleId::new("admin"),
                "Admin",
                "Administrator with full access",
            ),
            Role::new(RoleId::new("viewer"), "Viewer", "Can only view content"),
        ];

        store.resources = vec![
            Resource::new(
                ResourceId::new("document"),
                "Document",
                vec![
                    ActionId::new("view"),
                    ActionId::new("create"),
                    ActionId::new("update"),
                    ActionId::new("delete"),
                ],
            ),
            Resource::new(ResourceId::new("report"), "Report", vec![ActionId::new("view")]),
        ];

        store.users = vec![
            User::new(
                UserId::new("u1"),
                "Alice",
                "alice@example.com",
                vec![RoleId::new("admin")],
            ),
            User::new(
                UserId::new("u2"),
                "Bob",
                "bob@example.com",
                vec![RoleId::new("viewer")],
            ),
        ];

        store.permissions = ["view", "create", "update", "delete"]
            .into_iter()
            .map(|a| {
                Permission::new(
                    RoleId::new("admin"),
                    ResourceId::new("document"),
                    ActionId::new(a),
                )
            })
            .chain([Permission::new(
                RoleId::new("viewer"),
                ResourceId::new("document"),
                ActionId::new("view"),
            )])
            .collect();

        store
    }

    // Read access ------------------------------------------------------------

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn role(&self, id: &RoleId) -> Option<&Role> {
        find_by_id(&self.roles, id)
    }

    pub fn action(&self, id: &ActionId) -> Option<&Action> {
        find_by_id(&self.actions, id)
    }

    pub fn resource(&self, id: &ResourceId) -> Option<&Resource> {
        find_by_id(&self.resources, id)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        find_by_id(&self.users, id)
    }

    pub fn has_permission(
        &self,
        role_id: &RoleId,
        resource_id: &ResourceId,
        action_id: &ActionId,
    ) -> bool {
        self.permissions
            .iter()
            .any(|p| p.matches(role_id, resource_id, action_id))
    }

    /// Full copy of the current collections for render paths.
    pub fn snapshot(&self) -> PolicyStore {
        self.clone()
    }

    // Mutations --------------------------------------------------------------

    /// Append a role. Rejects an id that is already taken.
    pub fn add_role(&mut self, role: Role) -> DomainResult<()> {
        if self.role(&role.id).is_some() {
            return Err(DomainError::conflict(format!(
                "role id \"{}\" already exists",
                role.id
            )));
        }
        self.roles.push(role);
        Ok(())
    }

    /// Append a resource. Rejects an id that is already taken.
    pub fn add_resource(&mut self, resource: Resource) -> DomainResult<()> {
        if self.resource(&resource.id).is_some() {
            return Err(DomainError::conflict(format!(
                "resource id \"{}\" already exists",
                resource.id
            )));
        }
        self.resources.push(resource);
        Ok(())
    }

    /// Append a user. Rejects an id that is already taken.
    pub fn add_user(&mut self, user: User) -> DomainResult<()> {
        if self.user(&user.id).is_some() {
            return Err(DomainError::conflict(format!(
                "user id \"{}\" already exists",
                user.id
            )));
        }
        self.users.push(user);
        Ok(())
    }

    /// Merge present fields into the matching role. No-op (`false`) when the
    /// id is absent.
    pub fn update_role(&mut self, id: &RoleId, update: RoleUpdate) -> bool {
        let Some(role) = self.roles.iter_mut().find(|r| r.id == *id) else {
            return false;
        };
        if let Some(name) = update.name {
            role.name = name;
        }
        if let Some(description) = update.description {
            role.description = description;
        }
        true
    }

    /// Merge present fields into the matching user. No-op (`false`) when the
    /// id is absent.
    pub fn update_user(&mut self, id: &UserId, update: UserUpdate) -> bool {
        let Some(user) = self.users.iter_mut().find(|u| u.id == *id) else {
            return false;
        };
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(roles) = update.roles {
            user.roles = roles;
        }
        true
    }

    /// Remove a role and everything referencing it: grants with that role id
    /// and the id's occurrences in user assignments.
    ///
    /// The cascades run even when no stored role matches: grants and
    /// assignments may reference ids that never resolved to a role.
    pub fn delete_role(&mut self, id: &RoleId) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| r.id != *id);
        let removed = self.roles.len() != before;

        self.permissions.retain(|p| p.role_id != *id);
        for user in &mut self.users {
            user.roles.retain(|rid| rid != id);
        }

        removed
    }

    /// Remove a resource and every grant referencing it.
    pub fn delete_resource(&mut self, id: &ResourceId) -> bool {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != *id);
        let removed = self.resources.len() != before;

        self.permissions.retain(|p| p.resource_id != *id);

        removed
    }

    /// Remove a user. Nothing references users, so no cascade.
    pub fn delete_user(&mut self, id: &UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != *id);
        self.users.len() != before
    }

    /// Flip a grant: remove the exact-match permission if present, insert it
    /// otherwise. The only write path into the permission collection besides
    /// the delete cascades.
    pub fn toggle_permission(
        &mut self,
        role_id: RoleId,
        resource_id: ResourceId,
        action_id: ActionId,
    ) -> Toggle {
        match self
            .permissions
            .iter()
            .position(|p| p.matches(&role_id, &resource_id, &action_id))
        {
            Some(idx) => {
                self.permissions.remove(idx);
                Toggle::Revoked
            }
            None => {
                self.permissions
                    .push(Permission::new(role_id, resource_id, action_id));
                Toggle::Granted
            }
        }
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    fn ids((r, x, a): (u8, u8, u8)) -> (RoleId, ResourceId, ActionId) {
        (
            RoleId::new(format!("role-{r}")),
            ResourceId::new(format!("res-{x}")),
            ActionId::new(format!("act-{a}")),
        )
    }

    fn store_from_toggles(seq: &[(u8, u8, u8)]) -> PolicyStore {
        let mut store = PolicyStore::new();
        for &t in seq {
            let (r, x, a) = ids(t);
            store.toggle_permission(r, x, a);
        }
        store
    }

    proptest! {
        #[test]
        fn toggling_a_triple_twice_is_identity(
            seq in prop::collection::vec((0..4u8, 0..4u8, 0..4u8), 0..24),
            extra in (0..4u8, 0..4u8, 0..4u8),
        ) {
            let mut store = store_from_toggles(&seq);
            let before = store.clone();

            let (r, x, a) = ids(extra);
            store.toggle_permission(r.clone(), x.clone(), a.clone());
            store.toggle_permission(r, x, a);

            prop_assert_eq!(store, before);
        }

        #[test]
        fn grants_stay_unique_under_arbitrary_toggles(
            seq in prop::collection::vec((0..4u8, 0..4u8, 0..4u8), 0..48),
        ) {
            let store = store_from_toggles(&seq);
            let perms = store.permissions();
            for (i, p) in perms.iter().enumerate() {
                prop_assert!(!perms[i + 1..].contains(p));
            }
        }
    }
}
