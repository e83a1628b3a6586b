//! TryPullback combinator - a pullback whose input adaptation may fail.

use std::marker::PhantomData;

use crate::reader::trait_def::Reader;

/// TryPullback combinator - fallible input adaptation.
///
/// If `f` fails, the error becomes the output and the upstream reader is
/// never run. Otherwise the upstream output is wrapped in `Ok`.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let first = from_fn(|s: &String| s.to_uppercase())
///     .try_pullback(|names: &Vec<String>| names.first().cloned().ok_or("empty"));
///
/// assert_eq!(first.run(&vec!["foo".to_string()]), Ok("FOO".to_string()));
/// assert_eq!(first.run(&vec![]), Err("empty"));
/// ```
pub struct TryPullback<R, F, J> {
    pub(crate) upstream: R,
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<fn(&J)>,
}

impl<R, F, J> TryPullback<R, F, J> {
    pub(crate) fn new(upstream: R, f: F) -> Self {
        TryPullback {
            upstream,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<R: Clone, F: Clone, J> Clone for TryPullback<R, F, J> {
    fn clone(&self) -> Self {
        TryPullback::new(self.upstream.clone(), self.f.clone())
    }
}

impl<R, F, J> std::fmt::Debug for TryPullback<R, F, J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryPullback")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F, J, E> Reader for TryPullback<R, F, J>
where
    R: Reader,
    F: Fn(&J) -> Result<R::Input, E>,
{
    type Input = J;
    type Output = Result<R::Output, E>;

    fn run(&self, input: &J) -> Result<R::Output, E> {
        match (self.f)(input) {
            Ok(narrowed) => Ok(self.upstream.run(&narrowed)),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("input adaptation failed; upstream reader skipped");
                Err(error)
            }
        }
    }
}
