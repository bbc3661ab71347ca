//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is identified by its natural key, not by the rest of its
/// attribute values; mutable fields may change any number of times without
/// affecting which entity it is. Repositories enforce their uniqueness
/// invariants through this seam.
pub trait Entity {
    /// Strongly-typed entity identifier (the natural key).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
