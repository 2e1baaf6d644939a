//! Collection types with consistent ordering.

use ordermap::OrderSet;

/// A hash set that iterates in insertion order.
///
/// Membership is decided by the element's `Hash` and `Eq` implementations,
/// so lookups cost the same no matter how many elements are present.
pub type Set<T> = OrderSet<T>;
