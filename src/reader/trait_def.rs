//! Reader trait definition - the core abstraction for composable computations.
//!
//! This module defines the `Reader` trait, which represents a computation that:
//! - Reads an input of type `Input` (the environment)
//! - Produces a value of type `Output`
//!
//! # Design Philosophy
//!
//! This trait follows the same pattern as `Iterator` and `Future`:
//! - Combinators return concrete types (zero-cost abstractions)
//! - Use `.erase_to_any_reader()` when you need type erasure
//!
//! # Failure as Data
//!
//! `Reader` has no error channel of its own. A reader whose `Output` is a
//! `Result<T, E>` is automatically a [`TryReader`], which unlocks the
//! failure-aware combinators on
//! [`TryReaderExt`](crate::reader::try_ext::TryReaderExt).

use std::rc::Rc;
use std::sync::Arc;

/// The core Reader trait - a computation from an input to an output.
///
/// `run` borrows both the reader and the input, so a reader can be run any
/// number of times and a combinator can hand the same input to more than one
/// upstream reader.
///
/// Implementations must be referentially transparent with respect to their
/// own fields: the same input always produces the same output.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// struct Doubler;
///
/// impl Reader for Doubler {
///     type Input = i32;
///     type Output = i32;
///
///     fn run(&self, input: &i32) -> i32 {
///         input * 2
///     }
/// }
///
/// assert_eq!(Doubler.map(|x| x + 1).run(&20), 41);
/// ```
pub trait Reader {
    /// The input this reader consumes.
    type Input;

    /// The value this reader produces.
    type Output;

    /// Run this reader against the given input.
    fn run(&self, input: &Self::Input) -> Self::Output;
}

impl<R: Reader + ?Sized> Reader for &R {
    type Input = R::Input;
    type Output = R::Output;

    fn run(&self, input: &Self::Input) -> Self::Output {
        (**self).run(input)
    }
}

impl<R: Reader + ?Sized> Reader for Box<R> {
    type Input = R::Input;
    type Output = R::Output;

    fn run(&self, input: &Self::Input) -> Self::Output {
        (**self).run(input)
    }
}

impl<R: Reader + ?Sized> Reader for Rc<R> {
    type Input = R::Input;
    type Output = R::Output;

    fn run(&self, input: &Self::Input) -> Self::Output {
        (**self).run(input)
    }
}

impl<R: Reader + ?Sized> Reader for Arc<R> {
    type Input = R::Input;
    type Output = R::Output;

    fn run(&self, input: &Self::Input) -> Self::Output {
        (**self).run(input)
    }
}

/// A reader whose output is a `Result`.
///
/// Automatically implemented for every `Reader<Output = Result<T, E>>`.
/// You don't need to implement this trait yourself.
pub trait TryReader: Reader {
    /// The success type.
    type Ok;

    /// The failure type.
    type Error;

    /// Run this reader, viewing its output as a `Result`.
    fn try_run(&self, input: &Self::Input) -> Result<Self::Ok, Self::Error>;
}

impl<R, T, E> TryReader for R
where
    R: Reader<Output = Result<T, E>> + ?Sized,
{
    type Ok = T;
    type Error = E;

    fn try_run(&self, input: &Self::Input) -> Result<T, E> {
        self.run(input)
    }
}
