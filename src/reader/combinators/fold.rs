//! Fold combinator - collapses a `Result` output into a single value.

use crate::reader::trait_def::{Reader, TryReader};

/// Fold combinator - resolves both branches of a failure-aware reader.
///
/// Exactly one of `on_success` or `on_failure` runs per `run`. After a fold
/// the pipeline no longer carries a failure channel.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = from_fn(|n: &i32| if *n == 0 { Err("zero") } else { Ok(*n) })
///     .fold(|n| n * 10, |e| e.len() as i32);
///
/// assert_eq!(reader.run(&4), 40);
/// assert_eq!(reader.run(&0), 4);
/// ```
#[derive(Clone)]
pub struct Fold<R, S, F> {
    pub(crate) upstream: R,
    pub(crate) on_success: S,
    pub(crate) on_failure: F,
}

impl<R, S, F> std::fmt::Debug for Fold<R, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fold")
            .field("upstream", &"<reader>")
            .field("on_success", &"<function>")
            .field("on_failure", &"<function>")
            .finish()
    }
}

impl<R, S, F, B> Reader for Fold<R, S, F>
where
    R: TryReader,
    S: Fn(R::Ok) -> B,
    F: Fn(R::Error) -> B,
{
    type Input = R::Input;
    type Output = B;

    fn run(&self, input: &R::Input) -> B {
        match self.upstream.try_run(input) {
            Ok(value) => (self.on_success)(value),
            Err(error) => (self.on_failure)(error),
        }
    }
}
