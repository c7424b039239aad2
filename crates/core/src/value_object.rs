//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values
//! are considered equal (e.g. a stock location, a tray composition line).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - only the values matter.
pub trait ValueObject: Clone + PartialEq {}
