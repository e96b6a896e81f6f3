use serde::{Deserialize, Serialize};

use cedarboard_core::{Entity, RoleId, UserId};

/// A principal that roles can be assigned to.
///
/// Role references are not validated; a dangling id stays in the list and
/// is rendered literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub roles: Vec<RoleId>,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<RoleId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            roles,
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Partial update for a user; `None` fields keep the existing value.
///
/// `roles` replaces the assignment list wholesale when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub roles: Option<Vec<RoleId>>,
}
