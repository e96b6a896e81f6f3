use serde::{Deserialize, Serialize};

use cedarboard_core::{ActionId, Entity, ResourceId};

/// A resource type that actions can be granted on.
///
/// `actions` lists the catalog entries applicable to this resource, in
/// declaration order; references are not validated, and a dangling id is
/// rendered literally wherever it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub actions: Vec<ActionId>,
}

impl Resource {
    pub fn new(id: ResourceId, name: impl Into<String>, actions: Vec<ActionId>) -> Self {
        Self {
            id,
            name: name.into(),
            actions,
        }
    }
}

impl Entity for Resource {
    type Id = ResourceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
