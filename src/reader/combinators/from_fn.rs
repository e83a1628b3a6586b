//! FromFn - a reader built directly from a closure.

use std::marker::PhantomData;

use crate::reader::trait_def::Reader;

/// A reader that runs a closure against its input.
///
/// Zero-cost: no heap allocation. This is the usual starting point of a
/// pipeline when the erased [`AnyReader`](crate::reader::AnyReader) is not
/// needed.
///
/// Created by [`from_fn`](crate::reader::constructors::from_fn).
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = from_fn(|n: &i64| n.to_string());
/// assert_eq!(reader.run(&42), "42");
/// ```
pub struct FromFn<F, I> {
    pub(crate) f: F,
    _phantom: PhantomData<fn(&I)>,
}

impl<F, I> FromFn<F, I> {
    /// Create a new FromFn reader.
    pub fn new(f: F) -> Self {
        FromFn {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F: Clone, I> Clone for FromFn<F, I> {
    fn clone(&self) -> Self {
        FromFn::new(self.f.clone())
    }
}

impl<F, I> std::fmt::Debug for FromFn<F, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, I, O> Reader for FromFn<F, I>
where
    F: Fn(&I) -> O,
{
    type Input = I;
    type Output = O;

    fn run(&self, input: &I) -> O {
        (self.f)(input)
    }
}
