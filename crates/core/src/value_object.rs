//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two value
/// objects with the same attribute values are the same value. A permission
/// grant is the canonical example in this domain: the (role, resource,
/// action) triple *is* the grant; there is no separate identity to track.
///
/// The trait requires `Clone + PartialEq + Debug` so values stay cheap to
/// copy, comparable, and debuggable in tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
