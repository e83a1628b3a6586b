//! Ask - a reader that hands back its own input.

use std::marker::PhantomData;

use crate::reader::trait_def::Reader;

/// A reader whose output is a clone of its input.
///
/// Created by [`ask`](crate::reader::constructors::ask). Useful as the root
/// of a pipeline that is built purely out of `map` and `flat_map`.
pub struct Ask<I> {
    _phantom: PhantomData<fn(&I)>,
}

impl<I> Ask<I> {
    /// Create a new Ask reader.
    pub fn new() -> Self {
        Ask {
            _phantom: PhantomData,
        }
    }
}

impl<I> Default for Ask<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Clone for Ask<I> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<I> std::fmt::Debug for Ask<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ask").finish()
    }
}

impl<I: Clone> Reader for Ask<I> {
    type Input = I;
    type Output = I;

    fn run(&self, input: &I) -> I {
        input.clone()
    }
}
