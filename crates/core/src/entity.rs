//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity here does not imply uniqueness within a collection: the inventory
/// accepts several records sharing one id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
