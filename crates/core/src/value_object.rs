//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two
/// `SizePricing` entries with the same base and topping price are the same
/// pricing rule, while two pizzas with identical state are still distinct
/// entities.
///
/// The trait requires `Clone` (values are cheap to copy), `PartialEq`
/// (compared by attributes) and `Debug` (loggable in tests).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
