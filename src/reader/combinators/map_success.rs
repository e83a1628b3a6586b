//! MapSuccess combinator - transforms only the success branch.

use crate::reader::trait_def::{Reader, TryReader};

/// MapSuccess combinator - maps `Ok` values, passes `Err` through untouched.
///
/// The failure value and its type are preserved exactly.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = from_fn(|n: &i64| n.to_string())
///     .try_map(|s| Ok::<_, String>(s.len()))
///     .map_success(|len| len.to_string());
///
/// assert_eq!(reader.run(&999_999_999), Ok("9".to_string()));
/// ```
#[derive(Clone)]
pub struct MapSuccess<R, F> {
    pub(crate) upstream: R,
    pub(crate) f: F,
}

impl<R, F> std::fmt::Debug for MapSuccess<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSuccess")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F, B> Reader for MapSuccess<R, F>
where
    R: TryReader,
    F: Fn(R::Ok) -> B,
{
    type Input = R::Input;
    type Output = Result<B, R::Error>;

    fn run(&self, input: &R::Input) -> Result<B, R::Error> {
        self.upstream.try_run(input).map(&self.f)
    }
}
