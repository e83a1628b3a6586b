//! Constructor functions for creating readers.
//!
//! These functions provide ergonomic ways to start a pipeline without
//! directly constructing the combinator types.

use crate::reader::combinators::{Ask, FromFn, Pure};

/// Create a reader from a closure.
///
/// Zero-cost: no heap allocation. Use
/// [`AnyReader::new`](crate::reader::AnyReader::new) instead when the
/// reader must have a nameable type from the start.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = from_fn(|n: &i64| n.to_string());
/// assert_eq!(reader.run(&999_999_999), "999999999");
/// ```
pub fn from_fn<I, O, F>(f: F) -> FromFn<F, I>
where
    F: Fn(&I) -> O,
{
    FromFn::new(f)
}

/// Create a reader that returns a clone of its input.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = ask::<String>().map(|s| s.len());
/// assert_eq!(reader.run(&"hello".to_string()), 5);
/// ```
pub fn ask<I: Clone>() -> Ask<I> {
    Ask::new()
}

/// Create a reader that ignores its input and returns `value`.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = pure::<_, i32>("constant");
/// assert_eq!(reader.run(&1), "constant");
/// assert_eq!(reader.run(&2), "constant");
/// ```
pub fn pure<T: Clone, I>(value: T) -> Pure<T, I> {
    Pure::new(value)
}
