//! Value object trait: equality by value, not identity.
//!
//! Catalog limits (a min/max range in centimeters, a weight cap) carry no identity
//! of their own; two ranges with the same bounds are the same range.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Bounds {
///     min: f64,
///     max: f64,
/// }
///
/// impl ValueObject for Bounds {}
///
/// assert_eq!(Bounds { min: 15.0, max: 200.0 }, Bounds { min: 15.0, max: 200.0 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
