use serde::{Deserialize, Serialize};

use cedarboard_core::{Entity, RoleId};

/// A named role that permissions are granted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn new(id: RoleId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Entity for Role {
    type Id = RoleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Partial update for a role; `None` fields keep the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}
