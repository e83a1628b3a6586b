//! MapFailure combinator - transforms only the failure branch.

use crate::reader::trait_def::{Reader, TryReader};

/// MapFailure combinator - maps `Err` values, passes `Ok` through untouched.
///
/// Useful for converting error types so that two failure-aware pipelines
/// share one error channel.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = from_fn(|n: &i32| if *n < 0 { Err(*n) } else { Ok(*n) })
///     .map_failure(|n| format!("negative: {}", n));
///
/// assert_eq!(reader.run(&-2), Err("negative: -2".to_string()));
/// assert_eq!(reader.run(&2), Ok(2));
/// ```
#[derive(Clone)]
pub struct MapFailure<R, F> {
    pub(crate) upstream: R,
    pub(crate) f: F,
}

impl<R, F> std::fmt::Debug for MapFailure<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapFailure")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F, E2> Reader for MapFailure<R, F>
where
    R: TryReader,
    F: Fn(R::Error) -> E2,
{
    type Input = R::Input;
    type Output = Result<R::Ok, E2>;

    fn run(&self, input: &R::Input) -> Result<R::Ok, E2> {
        self.upstream.try_run(input).map_err(&self.f)
    }
}
