use serde::{Deserialize, Serialize};

use cedarboard_core::{ActionId, Entity};

/// An operation that can be granted on a resource.
///
/// The action catalog is fixed and global; the console never edits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub name: String,
}

impl Action {
    pub fn new(id: ActionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Action {
    type Id = ActionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// The built-in catalog: view, create, update, delete.
pub fn catalog() -> Vec<Action> {
    [
        ("view", "View"),
        ("create", "Create"),
        ("update", "Update"),
        ("delete", "Delete"),
    ]
    .into_iter()
    .map(|(id, name)| Action::new(ActionId::new(id), name))
    .collect()
}
