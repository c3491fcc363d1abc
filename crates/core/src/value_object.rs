//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one; constructors are where validation happens, so a value
/// object that exists is a valid one.
///
/// Example:
/// - `Quantity(10)` is a value object
/// - `Item { id: ItemId(1), .. }` is an entity
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct UnitPrice(f64);
///
/// impl ValueObject for UnitPrice {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
