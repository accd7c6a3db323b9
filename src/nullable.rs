//! The `Nullable` seam: anything that may or may not point at a value.
//!
//! A raw pointer in other languages covers both the owning and the borrowing
//! case. In Rust those are different types, so the read operations in
//! [`ops`](crate::ops) are written against this trait instead of a single
//! concrete pointer type.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::NullError;

/// A pointer-like value that is either present (points at a `Target`) or
/// absent.
///
/// Implemented for the optional forms `Option<&T>`, `Option<&mut T>`,
/// `Option<Box<T>>`, `Option<Rc<T>>` and `Option<Arc<T>>`, for the always
/// present smart pointers `Box<T>`, `Rc<T>` and `Arc<T>`, and for shared
/// references to any of these.
pub trait Nullable {
    /// The type being pointed at.
    type Target;

    /// Returns a reference to the pointee, or `None` when absent.
    fn as_target(&self) -> Option<&Self::Target>;

    /// Returns `true` when there is no pointee.
    #[inline]
    fn is_null(&self) -> bool {
        self.as_target().is_none()
    }
}

impl<T> Nullable for Option<&T> {
    type Target = T;

    #[inline(always)]
    fn as_target(&self) -> Option<&T> {
        *self
    }
}

impl<T> Nullable for Option<&mut T> {
    type Target = T;

    #[inline(always)]
    fn as_target(&self) -> Option<&T> {
        self.as_deref()
    }
}

impl<T> Nullable for Option<Box<T>> {
    type Target = T;

    #[inline(always)]
    fn as_target(&self) -> Option<&T> {
        self.as_deref()
    }
}

impl<T> Nullable for Option<Rc<T>> {
    type Target = T;

    #[inline(always)]
    fn as_target(&self) -> Option<&T> {
        self.as_deref()
    }
}

impl<T> Nullable for Option<Arc<T>> {
    type Target = T;

    #[inline(always)]
    fn as_target(&self) -> Option<&T> {
        self.as_deref()
    }
}

impl<T> Nullable for Box<T> {
    type Target = T;

    #[inline(always)]
    fn as_target(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T> Nullable for Rc<T> {
    type Target = T;

    #[inline(always)]
    fn as_target(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T> Nullable for Arc<T> {
    type Target = T;

    #[inline(always)]
    fn as_target(&self) -> Option<&T> {
        Some(&**self)
    }
}

// Lets callers lend a pointer they keep owning, e.g. `value(&self.field)`.
impl<P: Nullable + ?Sized> Nullable for &P {
    type Target = P::Target;

    #[inline(always)]
    fn as_target(&self) -> Option<&P::Target> {
        (**self).as_target()
    }
}

/// Method-call forms of the free functions in [`ops`](crate::ops).
///
/// Blanket-implemented for every [`Nullable`]. Each method borrows `self`, so
/// the pointer stays usable afterwards.
///
/// # Method resolution on smart pointers
///
/// `Box<T>`, `Rc<T>` and `Arc<T>` are [`Nullable`] too, so with this trait in
/// scope `.value()`, `.value_or(..)`, `.copy()` and `.try_value()` on a smart
/// pointer resolve here before auto-deref reaches a method of the same name
/// on `T`. Dereference explicitly to call the pointee's own method:
///
/// ```rust
/// use optr::NullableExt;
///
/// #[derive(Clone, Default)]
/// struct Gauge(u32);
///
/// impl Gauge {
///     fn value(&self) -> u32 {
///         self.0 * 10
///     }
/// }
///
/// let gauge = Box::new(Gauge(4));
/// assert_eq!(gauge.value().0, 4); // `NullableExt::value`, a cloned `Gauge`
/// assert_eq!((*gauge).value(), 40); // `Gauge::value`
/// ```
///
/// ```rust
/// use optr::{to, NullableExt};
///
/// let limit: Option<Box<u32>> = None;
/// assert_eq!(limit.value(), 0);
/// assert_eq!(limit.value_or(10), 10);
///
/// let name = Some(to(String::from("optr")));
/// assert_eq!(name.copy().as_deref().map(String::as_str), Some("optr"));
/// ```
pub trait NullableExt: Nullable {
    /// See [`value`](crate::value).
    fn value(&self) -> Self::Target
    where
        Self::Target: Clone + Default,
    {
        crate::ops::value(self)
    }

    /// See [`value_or`](crate::value_or).
    fn value_or(&self, default: Self::Target) -> Self::Target
    where
        Self::Target: Clone,
    {
        crate::ops::value_or(self, default)
    }

    /// See [`copy`](crate::copy).
    fn copy(&self) -> Option<Box<Self::Target>>
    where
        Self::Target: Clone,
    {
        crate::ops::copy(self)
    }

    /// See [`try_value`](crate::try_value).
    ///
    /// # Errors
    /// Returns [`NullError`] if the pointer is absent.
    fn try_value(&self) -> Result<Self::Target, NullError>
    where
        Self::Target: Clone,
    {
        crate::ops::try_value(self)
    }
}

impl<P: Nullable + ?Sized> NullableExt for P {}
