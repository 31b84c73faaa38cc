//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// submitted review is one: it has no identity, is never edited, and two
/// reviews with the same fields are indistinguishable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Rating(u8);
///
/// impl ValueObject for Rating {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
