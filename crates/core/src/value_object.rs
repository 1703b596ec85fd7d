//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attributes: two
/// instances with equal fields are interchangeable. Because they are routinely
/// stored in sets (e.g. the lines allocated to a batch), the trait requires
/// `Eq + Hash` on top of the usual `Clone + Debug`.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Line { order: String, qty: u32 }
///
/// impl ValueObject for Line {}
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
