//! TryMapSuccess combinator - a fallible transformation of the success branch.

use crate::reader::trait_def::{Reader, TryReader};

/// TryMapSuccess combinator - applies a fallible transformation to `Ok`
/// values.
///
/// - An upstream `Err` passes through unchanged and `f` is never called.
/// - If `f` fails, its error replaces the success value. It is converted
///   into the upstream error type with `Into`, so the pipeline keeps a
///   single error channel.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
/// use tributary::BoxError;
///
/// let reader = from_fn(|s: &String| s.clone())
///     .try_map(|s| Ok::<_, BoxError>(s))
///     .try_map_success(|s| s.parse::<u8>());
///
/// assert_eq!(reader.run(&"7".to_string()).unwrap(), 7);
/// assert!(reader.run(&"seven".to_string()).is_err());
/// ```
#[derive(Clone)]
pub struct TryMapSuccess<R, F> {
    pub(crate) upstream: R,
    pub(crate) f: F,
}

impl<R, F> std::fmt::Debug for TryMapSuccess<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMapSuccess")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F, B, E2> Reader for TryMapSuccess<R, F>
where
    R: TryReader,
    F: Fn(R::Ok) -> Result<B, E2>,
    E2: Into<R::Error>,
{
    type Input = R::Input;
    type Output = Result<B, R::Error>;

    fn run(&self, input: &R::Input) -> Result<B, R::Error> {
        let value = self.upstream.try_run(input)?;
        (self.f)(value).map_err(|error| {
            #[cfg(feature = "tracing")]
            tracing::debug!("success transform failed; capturing failure");
            error.into()
        })
    }
}
