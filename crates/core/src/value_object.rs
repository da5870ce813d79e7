//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable once built and compared by their attribute
/// values. Two instances with the same fields are interchangeable, which is
/// what lets a collection deduplicate them without any identifier.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(1.5), Price(1.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
