//! Pullback combinator - adapts a reader to a different input type.

use std::marker::PhantomData;

use crate::reader::trait_def::Reader;

/// Pullback combinator - narrows a wider input down to the upstream's input.
///
/// This is the contravariant counterpart to [`Map`](super::Map): `Map`
/// changes what comes out, `Pullback` changes what goes in.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = from_fn(|n: &usize| n.to_string())
///     .pullback(|s: &String| s.len());
///
/// assert_eq!(reader.run(&"foo".to_string()), "3");
/// ```
pub struct Pullback<R, F, J> {
    pub(crate) upstream: R,
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<fn(&J)>,
}

impl<R, F, J> Pullback<R, F, J> {
    pub(crate) fn new(upstream: R, f: F) -> Self {
        Pullback {
            upstream,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<R: Clone, F: Clone, J> Clone for Pullback<R, F, J> {
    fn clone(&self) -> Self {
        Pullback::new(self.upstream.clone(), self.f.clone())
    }
}

impl<R, F, J> std::fmt::Debug for Pullback<R, F, J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pullback")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F, J> Reader for Pullback<R, F, J>
where
    R: Reader,
    F: Fn(&J) -> R::Input,
{
    type Input = J;
    type Output = R::Output;

    fn run(&self, input: &J) -> R::Output {
        let narrowed = (self.f)(input);
        self.upstream.run(&narrowed)
    }
}
