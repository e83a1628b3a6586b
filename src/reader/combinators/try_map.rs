//! TryMap combinator - introduces a failure channel into a pipeline.

use crate::reader::trait_def::Reader;

/// TryMap combinator - applies a fallible transformation to the output.
///
/// The upstream reader always runs. `Ok` from the transformation becomes
/// `Ok(value)`; an error is captured as `Err(error)` and is ordinary data from
/// then on.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = from_fn(|n: &i64| n.to_string()).try_map(|s| {
///     if s.len() == 1 {
///         Err("single digit")
///     } else {
///         Ok(s.len())
///     }
/// });
///
/// assert_eq!(reader.run(&1), Err("single digit"));
/// assert_eq!(reader.run(&10), Ok(2));
/// ```
#[derive(Clone)]
pub struct TryMap<R, F> {
    pub(crate) upstream: R,
    pub(crate) f: F,
}

impl<R, F> std::fmt::Debug for TryMap<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMap")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F, B, E> Reader for TryMap<R, F>
where
    R: Reader,
    F: Fn(R::Output) -> Result<B, E>,
{
    type Input = R::Input;
    type Output = Result<B, E>;

    fn run(&self, input: &R::Input) -> Result<B, E> {
        let result = (self.f)(self.upstream.run(input));
        #[cfg(feature = "tracing")]
        if result.is_err() {
            tracing::debug!("transform failed; capturing failure");
        }
        result
    }
}
