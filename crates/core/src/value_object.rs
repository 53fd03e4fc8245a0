//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: identity does
/// not matter, only the attribute values do. A `StockLevel { quantity: 10,
/// reserved_quantity: 2 }` is the same snapshot wherever it came from; an
/// `InventoryItem` with the same fields but a different id is a different
/// item (that one is an [`Entity`](crate::Entity)).
///
/// To "modify" a value object, build a new one. This keeps the domain
/// functions pure: they read snapshots and return freshly computed values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
