use cedarboard_core::{ActionId, Entity, ResourceId};
use cedarboard_rbac::{Permission, PolicyStore};

/// Render the full Cedar policy document for the current store state.
///
/// Deterministic: same store contents, byte-identical output. Statement
/// blocks follow role insertion order; within a role, resource groups keep
/// the first-seen order of that role's grants and actions keep grant order.
/// Display names resolve through the store's collections, falling back to
/// the raw id when a reference dangles.
pub fn generate(store: &PolicyStore) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("// Cedar Policies Generated from RBAC UI".to_string());
    lines.push(String::new());

    for role in store.roles() {
        let grants: Vec<&Permission> = store
            .permissions()
            .iter()
            .filter(|p| p.role_id == role.id)
            .collect();

        let groups = group_by_resource(&grants);
        if groups.is_empty() {
            continue;
        }

        lines.push(format!("// Permissions for Role: {}", role.name));

        for (resource_id, action_ids) in groups {
            let resource_name = store
                .resource(resource_id)
                .map(Entity::display_name)
                .unwrap_or(resource_id.as_str());

            let action_refs: Vec<String> = action_ids
                .iter()
                .map(|id| {
                    let name = store
                        .action(id)
                        .map(Entity::display_name)
                        .unwrap_or(id.as_str());
                    format!("Action::\"{name}\"")
                })
                .collect();

            let condition = if action_refs.len() == 1 {
                format!("action == {}", action_refs[0])
            } else {
                format!("action in [{}]", action_refs.join(", "))
            };

            lines.push("permit(".to_string());
            lines.push(format!("  principal in Role::\"{}\",", role.name));
            lines.push(format!("  {condition},"));
            lines.push(format!("  resource is {resource_name}"));
            lines.push(");".to_string());
            lines.push(String::new());
        }
    }

    lines.push(
        "// User Role Assignments (Usually handled by the application context, but shown here for clarity)"
            .to_string(),
    );
    lines.push("/*".to_string());
    for user in store.users() {
        if user.roles.is_empty() {
            continue;
        }
        let role_refs: Vec<String> = user
            .roles
            .iter()
            .map(|rid| match store.role(rid) {
                Some(role) => format!("Role::\"{}\"", role.name),
                // Dangling assignment: the raw id, no Role wrapper.
                None => rid.as_str().to_string(),
            })
            .collect();
        lines.push(format!(
            "User::\"{}\" has roles: [{}]",
            user.id,
            role_refs.join(", ")
        ));
    }
    lines.push("*/".to_string());

    lines.join("\n")
}

/// Group a role's grants by resource, preserving first-seen resource order
/// and per-resource grant order.
fn group_by_resource<'a>(grants: &[&'a Permission]) -> Vec<(&'a ResourceId, Vec<&'a ActionId>)> {
    let mut groups: Vec<(&ResourceId, Vec<&ActionId>)> = Vec::new();
    for grant in grants {
        match groups.iter_mut().find(|(rid, _)| **rid == grant.resource_id) {
            Some((_, actions)) => actions.push(&grant.action_id),
            None => groups.push((&grant.resource_id, vec![&grant.action_id])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use cedarboard_core::{ActionId, ResourceId, RoleId, UserId};
    use cedarboard_rbac::{Resource, Role, User};

    use super::*;

    #[test]
    fn seeded_dataset_renders_expected_document() {
        let store = PolicyStore::seeded();

        let expected = "\
// Cedar Policies Generated from RBAC UI

// Permissions for Role: Admin
permit(
  principal in Role::\"Admin\",
  action in [Action::\"View\", Action::\"Create\", Action::\"Update\", Action::\"Delete\"],
  resource is Document
);

// Permissions for Role: Viewer
permit(
  principal in Role::\"Viewer\",
  action == Action::\"View\",
  resource is Document
);

// User Role Assignments (Usually handled by the application context, but shown here for clarity)
/*
User::\"u1\" has roles: [Role::\"Admin\"]
User::\"u2\" has roles: [Role::\"Viewer\"]
*/";

        assert_eq!(generate(&store), expected);
    }

    #[test]
    fn single_action_uses_equality_condition() {
        let mut store = PolicyStore::new();
        store
            .add_role(Role::new(RoleId::new("viewer"), "Viewer", ""))
            .unwrap();
        store
            .add_resource(Resource::new(
                ResourceId::new("document"),
                "Document",
                vec![ActionId::new("view")],
            ))
            .unwrap();
        store.toggle_permission(
            RoleId::new("viewer"),
            ResourceId::new("document"),
            ActionId::new("view"),
        );

        let text = generate(&store);
        assert!(text.contains("action == Action::\"View\","));
        assert!(!text.contains("action in ["));
    }

    #[test]
    fn multiple_actions_preserve_grant_order() {
        let mut store = PolicyStore::new();
        store
            .add_role(Role::new(RoleId::new("editor"), "Editor", ""))
            .unwrap();
        store
            .add_resource(Resource::new(
                ResourceId::new("document"),
                "Document",
                vec![ActionId::new("view"), ActionId::new("delete")],
            ))
            .unwrap();

        // Granted delete first, then view: the list keeps that order.
        store.toggle_permission(
            RoleId::new("editor"),
            ResourceId::new("document"),
            ActionId::new("delete"),
        );
        store.toggle_permission(
            RoleId::new("editor"),
            ResourceId::new("document"),
            ActionId::new("view"),
        );

        let text = generate(&store);
        assert!(text.contains("action in [Action::\"Delete\", Action::\"View\"],"));
    }

    #[test]
    fn roles_without_grants_are_omitted() {
        let mut store = PolicyStore::new();
        store
            .add_role(Role::new(RoleId::new("bystander"), "Bystander", ""))
            .unwrap();

        let text = generate(&store);
        assert!(!text.contains("Bystander"));
        assert!(!text.contains("permit("));
    }

    #[test]
    fn resource_groups_follow_first_seen_grant_order() {
        let mut store = PolicyStore::new();
        store
            .add_role(Role::new(RoleId::new("auditor"), "Auditor", ""))
            .unwrap();
        store
            .add_resource(Resource::new(
                ResourceId::new("document"),
                "Document",
                vec![ActionId::new("view")],
            ))
            .unwrap();
        store
            .add_resource(Resource::new(
                ResourceId::new("report"),
                "Report",
                vec![ActionId::new("view")],
            ))
            .unwrap();

        // Report granted before document: its block comes first even though
        // the resource collection lists document first.
        store.toggle_permission(
            RoleId::new("auditor"),
            ResourceId::new("report"),
            ActionId::new("view"),
        );
        store.toggle_permission(
            RoleId::new("auditor"),
            ResourceId::new("document"),
            ActionId::new("view"),
        );

        let text = generate(&store);
        let report_at = text.find("resource is Report").unwrap();
        let document_at = text.find("resource is Document").unwrap();
        assert!(report_at < document_at);
    }

    #[test]
    fn role_comment_appears_once_per_role() {
        let mut store = PolicyStore::new();
        store
            .add_role(Role::new(RoleId::new("auditor"), "Auditor", ""))
            .unwrap();
        store.toggle_permission(
            RoleId::new("auditor"),
            ResourceId::new("document"),
            ActionId::new("view"),
        );
        store.toggle_permission(
            RoleId::new("auditor"),
            ResourceId::new("report"),
            ActionId::new("view"),
        );

        let text = generate(&store);
        assert_eq!(text.matches("// Permissions for Role: Auditor").count(), 1);
        assert_eq!(text.matches("permit(").count(), 2);
    }

    #[test]
    fn dangling_resource_and_action_render_raw_ids() {
        let mut store = PolicyStore::new();
        store
            .add_role(Role::new(RoleId::new("editor"), "Editor", ""))
            .unwrap();

        // Neither the resource nor the action exists in the store.
        store.toggle_permission(
            RoleId::new("editor"),
            ResourceId::new("orphan-res"),
            ActionId::new("orphan-act"),
        );

        let text = generate(&store);
        assert!(text.contains("action == Action::\"orphan-act\","));
        assert!(text.contains("resource is orphan-res"));
    }

    #[test]
    fn dangling_user_role_renders_raw_id_without_wrapper() {
        let mut store = PolicyStore::new();
        store
            .add_user(User::new(
                UserId::new("u9"),
                "Mallory",
                "mallory@example.com",
                vec![RoleId::new("ghost")],
            ))
            .unwrap();

        let text = generate(&store);
        assert!(text.contains("User::\"u9\" has roles: [ghost]"));
    }

    #[test]
    fn empty_store_renders_header_and_markers() {
        let store = PolicyStore::new();

        let expected = "\
// Cedar Policies Generated from RBAC UI

// User Role Assignments (Usually handled by the application context, but shown here for clarity)
/*
*/";

        assert_eq!(generate(&store), expected);
    }

    #[test]
    fn users_without_roles_are_omitted_from_assignments() {
        let mut store = PolicyStore::new();
        store
            .add_user(User::new(
                UserId::new("u3"),
                "Carol",
                "carol@example.com",
                vec![],
            ))
            .unwrap();

        let text = generate(&store);
        assert!(!text.contains("u3"));
        assert!(text.contains("/*\n*/"));
    }

    #[test]
    fn generation_is_deterministic() {
        let store = PolicyStore::seeded();
        assert_eq!(generate(&store), generate(&store));
    }
}
