//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Variants are entities: two variants with the same id are the same variant,
/// whatever their color or stock.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
