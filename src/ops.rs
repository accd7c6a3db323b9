//! The optional pointer operations.
//!
//! All functions are pure: they read their inputs, may allocate one fresh
//! box, and touch no shared state. They are safe to call from any number of
//! threads at once.

use crate::error::NullError;
use crate::nullable::Nullable;

/// Moves `value` into a fresh heap allocation and returns the owning box.
///
/// Useful in single-expression initialisers where a named temporary would be
/// awkward:
///
/// ```rust
/// struct Input {
///     optional_field: Option<Box<String>>,
/// }
///
/// let input = Input {
///     optional_field: Some(optr::to("works fine".to_string())),
/// };
/// assert_eq!(input.optional_field.as_deref().map(String::as_str), Some("works fine"));
/// ```
///
/// The box always holds its own value. Reassigning the caller's binding
/// afterwards leaves it untouched:
///
/// ```rust
/// let mut value = "v1";
/// let field = optr::to(value);
/// value = "v2";
/// assert_eq!(*field, "v1");
/// # let _ = value;
/// ```
#[inline]
pub fn to<T>(value: T) -> Box<T> {
    trace_event!("allocated", ty = core::any::type_name::<T>());
    Box::new(value)
}

/// Returns a clone of the pointee, or `T::default()` when the pointer is
/// absent.
///
/// The pointee is always cloned, even when `ptr` is an owning
/// `Option<Box<T>>` passed by value; the box is then dropped. Pass `&ptr` to
/// keep the box, or use `ptr.map_or_else(T::default, |b| *b)` to move the
/// value out without cloning.
///
/// ```rust
/// let missing: Option<&String> = None;
/// assert_eq!(optr::value(missing), "");
/// assert_eq!(optr::value(Some(optr::to(42))), 42);
/// ```
#[inline]
pub fn value<P>(ptr: P) -> P::Target
where
    P: Nullable,
    P::Target: Clone + Default,
{
    match ptr.as_target() {
        Some(target) => target.clone(),
        None => {
            trace_event!("absent, using zero value", ty = core::any::type_name::<P::Target>());
            P::Target::default()
        }
    }
}

/// Returns a clone of the pointee, or `default` when the pointer is absent.
///
/// `default` is taken by value and handed back as-is; when the pointer is
/// present it is simply dropped.
///
/// Like [`value`], a present pointee is cloned even when an owning
/// `Option<Box<T>>` is passed by value. Pass `&ptr` to keep the box, or use
/// `ptr.map_or(default, |b| *b)` to move the value out instead.
///
/// ```rust
/// assert_eq!(optr::value_or(None::<&&str>, "default"), "default");
/// assert_eq!(optr::value_or(Some(optr::to("value")), "default"), "value");
/// ```
#[inline]
pub fn value_or<P>(ptr: P, default: P::Target) -> P::Target
where
    P: Nullable,
    P::Target: Clone,
{
    match ptr.as_target() {
        Some(target) => target.clone(),
        None => {
            trace_event!("absent, using fallback", ty = core::any::type_name::<P::Target>());
            default
        }
    }
}

/// Clones the pointee into a new box. Absent in, absent out.
///
/// The copy is a single `Clone` of the pointee, so the returned box never
/// shares storage with `ptr`. Shared pointers inside the pointee (`Rc`,
/// `Arc`, references) still point at the same referent afterwards.
///
/// No allocation happens for an absent input.
///
/// ```rust
/// let original = Some(optr::to(String::from("str")));
/// let the_copy = optr::copy(&original);
///
/// assert_eq!(the_copy, original);
/// assert!(!std::ptr::eq(
///     the_copy.as_deref().unwrap(),
///     original.as_deref().unwrap(),
/// ));
/// assert_eq!(optr::copy(None::<&String>), None);
/// ```
#[inline]
pub fn copy<P>(ptr: P) -> Option<Box<P::Target>>
where
    P: Nullable,
    P::Target: Clone,
{
    ptr.as_target().map(|target| to(target.clone()))
}

/// Returns a clone of the pointee, or [`NullError`] when absent.
///
/// For call sites where a missing value is a genuine error rather than
/// something to paper over with a default.
///
/// # Errors
/// Returns [`NullError`] if `ptr` is absent.
///
/// ```rust
/// use optr::NullError;
///
/// assert_eq!(optr::try_value(Some(optr::to(1u8))), Ok(1));
/// assert_eq!(optr::try_value(None::<&u8>), Err(NullError));
/// ```
#[inline]
pub fn try_value<P>(ptr: P) -> Result<P::Target, NullError>
where
    P: Nullable,
    P::Target: Clone,
{
    ptr.as_target().cloned().ok_or(NullError)
}
