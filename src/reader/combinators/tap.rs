//! Tap combinator - observe the output without changing it.

use crate::reader::trait_def::Reader;

/// A reader that hands its output to an observer and returns it unchanged.
///
/// The observer sees the output by reference, so nothing it does can alter
/// what flows downstream. A failure produced upstream passes through as-is.
///
/// Created by [`ReaderExt::tap`](crate::reader::ext::ReaderExt::tap).
#[derive(Clone)]
pub struct Tap<R, F> {
    pub(crate) upstream: R,
    pub(crate) f: F,
}

impl<R, F> std::fmt::Debug for Tap<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tap")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F> Reader for Tap<R, F>
where
    R: Reader,
    F: Fn(&R::Output),
{
    type Input = R::Input;
    type Output = R::Output;

    fn run(&self, input: &R::Input) -> R::Output {
        let value = self.upstream.run(input);
        (self.f)(&value);
        value
    }
}
