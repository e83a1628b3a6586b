//! ReplaceError combinators - substitute a default for any failure.

use crate::reader::trait_def::{Reader, TryReader};

/// A fold whose success branch is the identity and whose failure branch
/// yields a fixed value.
///
/// The replacement is cloned on every failing run; the error itself is
/// dropped. Created by
/// [`TryReaderExt::replace_error`](crate::reader::try_ext::TryReaderExt::replace_error).
#[derive(Clone)]
pub struct ReplaceError<R, T> {
    pub(crate) upstream: R,
    pub(crate) value: T,
}

impl<R, T: std::fmt::Debug> std::fmt::Debug for ReplaceError<R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplaceError")
            .field("upstream", &"<reader>")
            .field("value", &self.value)
            .finish()
    }
}

impl<R, T> Reader for ReplaceError<R, T>
where
    R: TryReader<Ok = T>,
    T: Clone,
{
    type Input = R::Input;
    type Output = T;

    fn run(&self, input: &R::Input) -> T {
        self.upstream
            .try_run(input)
            .unwrap_or_else(|_| self.value.clone())
    }
}

/// Like [`ReplaceError`], but computes the replacement lazily.
///
/// The closure runs only when the upstream reader fails.
#[derive(Clone)]
pub struct ReplaceErrorWith<R, F> {
    pub(crate) upstream: R,
    pub(crate) f: F,
}

impl<R, F> std::fmt::Debug for ReplaceErrorWith<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplaceErrorWith")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F> Reader for ReplaceErrorWith<R, F>
where
    R: TryReader,
    F: Fn() -> R::Ok,
{
    type Input = R::Input;
    type Output = R::Ok;

    fn run(&self, input: &R::Input) -> R::Ok {
        self.upstream.try_run(input).unwrap_or_else(|_| (self.f)())
    }
}
