//! # `optr` - Optional Pointer Utilities
//!
//! Small generic helpers for values that may or may not be there, held behind
//! a pointer. Every operation is a pure function over its inputs.
//!
//! ## Operations
//!
//! | Function          | Absent input            | Present input                   |
//! |-------------------|-------------------------|---------------------------------|
//! | [`to`]            | n/a                     | boxes the value                 |
//! | [`value`]         | `T::default()`          | clone of the pointee            |
//! | [`value_or`]      | the supplied fallback   | clone of the pointee            |
//! | [`copy`]          | `None`, no allocation   | `Some` fresh box with a clone   |
//! | [`try_value`]     | `Err(NullError)`        | clone of the pointee            |
//!
//! ## Representation
//!
//! The owning form of an optional pointer is `Option<Box<T>>`. `None` is the
//! Absent state and, thanks to the null-pointer niche, the whole thing is one
//! machine word. The read operations are generic over [`Nullable`], so they
//! also accept borrowed forms such as `Option<&T>` or `&Option<Box<T>>`.
//!
//! ### Ownership Guarantees
//!
//! - A `Box<T>` returned by [`to`] or [`copy`] uniquely owns a fresh heap
//!   allocation. It never aliases the caller's input.
//! - [`copy`] performs exactly one `Clone` of the pointee. Shared pointers
//!   inside `T` (`Rc`, `Arc`, `&U`) keep pointing at their referent; uniquely
//!   owned fields are duplicated by their own `Clone`.
//!
//! ## Example
//!
//! ```rust
//! use optr::{copy, to, value, value_or};
//!
//! #[derive(Debug, Default)]
//! struct Request {
//!     name: Option<Box<String>>,
//!     retries: Option<Box<u32>>,
//! }
//!
//! let request = Request {
//!     name: Some(to("works fine".to_string())),
//!     ..Request::default()
//! };
//!
//! assert_eq!(value(&request.name), "works fine");
//! assert_eq!(value(&request.retries), 0);
//! assert_eq!(value_or(&request.retries, 3), 3);
//!
//! let name = copy(&request.name);
//! assert_eq!(name.as_deref(), request.name.as_deref());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emits `trace`-level events for allocations and fallbacks.
//! - `proptest`: exports [`strategy`] for generating optional pointers.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod nullable;
pub mod ops;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use error::NullError;
pub use nullable::{Nullable, NullableExt};
pub use ops::{copy, to, try_value, value, value_or};

// Layout claims the API documentation relies on.
const _: () = {
    use core::mem;

    // Absent is the null pointer: no tag word.
    assert!(mem::size_of::<Option<Box<u64>>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<Box<String>>>() == mem::size_of::<Box<String>>());

    // `NullError` carries no payload.
    assert!(mem::size_of::<NullError>() == 0);
};
