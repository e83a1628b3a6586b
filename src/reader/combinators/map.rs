//! Map combinator - transforms the output of a reader.

use crate::reader::trait_def::Reader;

/// Map combinator - transforms the output.
///
/// Zero-cost: no heap allocation. The `Map` struct stores only
/// the upstream reader and the transformation function. The input is
/// never inspected.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = from_fn(|n: &i64| n.to_string()).map(|s| s.len());
/// assert_eq!(reader.run(&999_999_999), 9);
/// ```
#[derive(Clone)]
pub struct Map<R, F> {
    pub(crate) upstream: R,
    pub(crate) f: F,
}

impl<R, F> std::fmt::Debug for Map<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F, B> Reader for Map<R, F>
where
    R: Reader,
    F: Fn(R::Output) -> B,
{
    type Input = R::Input;
    type Output = B;

    fn run(&self, input: &R::Input) -> B {
        (self.f)(self.upstream.run(input))
    }
}
