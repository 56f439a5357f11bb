//! Entity trait: identity that survives changes to the record's other fields.

/// Entity marker + minimal interface.
///
/// Products, cart lines and orders are all entities: two records with the
/// same id describe the same thing even if a refetch changed their fields.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
