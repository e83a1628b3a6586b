//! Pure - a reader that ignores its input.

use std::marker::PhantomData;

use crate::reader::trait_def::Reader;

/// A reader that always produces the same value, whatever the input.
///
/// The value is cloned on every run. Created by
/// [`pure`](crate::reader::constructors::pure).
pub struct Pure<T, I> {
    pub(crate) value: T,
    _phantom: PhantomData<fn(&I)>,
}

impl<T, I> Pure<T, I> {
    /// Create a new Pure reader.
    pub fn new(value: T) -> Self {
        Pure {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<T: Clone, I> Clone for Pure<T, I> {
    fn clone(&self) -> Self {
        Pure::new(self.value.clone())
    }
}

impl<T: std::fmt::Debug, I> std::fmt::Debug for Pure<T, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pure").field("value", &self.value).finish()
    }
}

impl<T: Clone, I> Reader for Pure<T, I> {
    type Input = I;
    type Output = T;

    fn run(&self, _input: &I) -> T {
        self.value.clone()
    }
}
