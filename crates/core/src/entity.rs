//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same `id()` are the same thing, whatever the rest of
/// their state says. Implementors should key `PartialEq`/`Hash` on the id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, independent of mutable state.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
