//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Console entities are looked up by id and rendered by display name; both
/// live here so collection helpers stay generic over the entity kind.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Human-readable name shown in the console and in generated policy text.
    fn display_name(&self) -> &str;
}

/// First entity with the given id, in collection order.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|e| e.id() == id)
}
