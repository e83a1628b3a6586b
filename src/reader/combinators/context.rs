//! Context combinators - annotate failures with the stage that produced them.

use crate::context::ContextError;
use crate::reader::trait_def::{Reader, TryReader};

/// Wraps any failure in a fresh [`ContextError`] carrying `msg`.
///
/// Successes pass through untouched. Created by
/// [`TryReaderExt::context`](crate::reader::try_ext::TryReaderExt::context).
#[derive(Debug, Clone)]
pub struct Context<R> {
    pub(crate) upstream: R,
    pub(crate) msg: String,
}

impl<R> Reader for Context<R>
where
    R: TryReader,
{
    type Input = R::Input;
    type Output = Result<R::Ok, ContextError<R::Error>>;

    fn run(&self, input: &R::Input) -> Self::Output {
        self.upstream
            .try_run(input)
            .map_err(|error| ContextError::new(error).context(self.msg.clone()))
    }
}

/// Appends `msg` to the trail of a failure that already carries context.
///
/// Created by
/// [`TryReaderExt::context_chain`](crate::reader::try_ext::TryReaderExt::context_chain).
#[derive(Debug, Clone)]
pub struct ContextChain<R> {
    pub(crate) upstream: R,
    pub(crate) msg: String,
}

impl<R, E> Reader for ContextChain<R>
where
    R: TryReader<Error = ContextError<E>>,
{
    type Input = R::Input;
    type Output = Result<R::Ok, ContextError<E>>;

    fn run(&self, input: &R::Input) -> Self::Output {
        self.upstream
            .try_run(input)
            .map_err(|error| error.context(self.msg.clone()))
    }
}
