//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are never mutated in place: a price
/// recomputed for a new quantity is a new `Price`, not an edit of the old one.
///
/// ```ignore
/// let a = Price::new(5000.0);
/// let b = Price::new(5000.0);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
