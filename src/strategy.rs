//! `proptest` strategies for optional pointers.
//!
//! Enabled by the `proptest` feature.

use proptest::prelude::*;

/// Odds that [`nullable`] produces a present pointer.
pub const PRESENT_WEIGHT: f64 = 0.75;

/// Generates `Option<Box<T>>` from a strategy for `T`, absent a quarter of
/// the time.
pub fn nullable<S>(inner: S) -> impl Strategy<Value = Option<Box<S::Value>>>
where
    S: Strategy,
{
    proptest::option::weighted(PRESENT_WEIGHT, inner).prop_map(|value| value.map(crate::to))
}

/// Generates always-present `Box<T>` from a strategy for `T`.
pub fn boxed<S>(inner: S) -> impl Strategy<Value = Box<S::Value>>
where
    S: Strategy,
{
    inner.prop_map(crate::to)
}
