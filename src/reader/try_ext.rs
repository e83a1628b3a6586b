//! Extension trait providing failure-aware combinators.
//!
//! `TryReaderExt` is implemented for every reader whose output is a
//! `Result`. Its combinators work "inside" the result: they never treat a
//! failure as if it were a success.

use crate::context::ContextError;
use crate::reader::combinators::{
    Context, ContextChain, Fold, MapFailure, MapSuccess, ReplaceError, ReplaceErrorWith,
    TryMapSuccess,
};
use crate::reader::trait_def::TryReader;

/// Extension trait providing combinator methods for readers that output a
/// `Result`.
///
/// This trait is automatically implemented for all `TryReader` types.
/// You don't need to implement this trait yourself.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let reader = from_fn(|n: &i32| n.to_string())
///     .try_map(|s| if s == "0" { Err("zero") } else { Ok(format!("{}!", s)) })
///     .map_success(|s| s.len())
///     .replace_error(0);
///
/// assert_eq!(reader.run(&12), 3);
/// assert_eq!(reader.run(&0), 0);
/// ```
pub trait TryReaderExt: TryReader {
    /// Collapse both branches into a single value.
    ///
    /// Exactly one of the two closures runs per `run`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::reader::prelude::*;
    ///
    /// let reader = from_fn(|n: &i32| n.to_string())
    ///     .try_map(|s| if s == "0" { Err("foo") } else { Ok(format!("{}!", s)) })
    ///     .fold(|s| s.len(), |e| e.len());
    ///
    /// assert_eq!(reader.run(&1), 2);
    /// assert_eq!(reader.run(&0), 3);
    /// ```
    fn fold<B, S, F>(self, on_success: S, on_failure: F) -> Fold<Self, S, F>
    where
        Self: Sized,
        S: Fn(Self::Ok) -> B,
        F: Fn(Self::Error) -> B,
    {
        Fold {
            upstream: self,
            on_success,
            on_failure,
        }
    }

    /// Replace any failure with `value`, ending the failure channel.
    ///
    /// `value` is cloned each time a failure is replaced.
    fn replace_error(self, value: Self::Ok) -> ReplaceError<Self, Self::Ok>
    where
        Self: Sized,
        Self::Ok: Clone,
    {
        ReplaceError {
            upstream: self,
            value,
        }
    }

    /// Replace any failure with the value computed by `f`.
    ///
    /// `f` runs only on failure.
    fn replace_error_with<F>(self, f: F) -> ReplaceErrorWith<Self, F>
    where
        Self: Sized,
        F: Fn() -> Self::Ok,
    {
        ReplaceErrorWith { upstream: self, f }
    }

    /// Transform the success value; failures pass through unchanged.
    fn map_success<B, F>(self, f: F) -> MapSuccess<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Ok) -> B,
    {
        MapSuccess { upstream: self, f }
    }

    /// Transform the failure value; successes pass through unchanged.
    fn map_failure<E2, F>(self, f: F) -> MapFailure<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Error) -> E2,
    {
        MapFailure { upstream: self, f }
    }

    /// Apply a fallible transformation to the success value.
    ///
    /// A failure from upstream short-circuits: `f` is not called. A failure
    /// from `f` is converted into this reader's error type and replaces the
    /// success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::reader::prelude::*;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppError { Empty, TooLong(usize) }
    ///
    /// let reader = from_fn(|s: &String| s.clone())
    ///     .try_map(|s| if s.is_empty() { Err(AppError::Empty) } else { Ok(s) })
    ///     .try_map_success(|s| if s.len() > 3 { Err(AppError::TooLong(s.len())) } else { Ok(s.len()) });
    ///
    /// assert_eq!(reader.run(&"abc".to_string()), Ok(3));
    /// assert_eq!(reader.run(&"".to_string()), Err(AppError::Empty));
    /// assert_eq!(reader.run(&"abcd".to_string()), Err(AppError::TooLong(4)));
    /// ```
    fn try_map_success<B, E2, F>(self, f: F) -> TryMapSuccess<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Ok) -> Result<B, E2>,
        E2: Into<Self::Error>,
    {
        TryMapSuccess { upstream: self, f }
    }

    /// Wrap failures in a [`ContextError`] describing this stage.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::reader::prelude::*;
    ///
    /// let reader = from_fn(|s: &String| s.parse::<u16>())
    ///     .context("parsing port")
    ///     .map_success(|port| port + 1)
    ///     .context_chain("loading server settings");
    ///
    /// let err = reader.run(&"http".to_string()).unwrap_err();
    /// assert_eq!(err.context_trail(), &["parsing port", "loading server settings"]);
    /// ```
    fn context(self, msg: impl Into<String>) -> Context<Self>
    where
        Self: Sized,
    {
        Context {
            upstream: self,
            msg: msg.into(),
        }
    }

    /// Append another layer to a failure that already carries context.
    fn context_chain<E>(self, msg: impl Into<String>) -> ContextChain<Self>
    where
        Self: Sized + TryReader<Error = ContextError<E>>,
    {
        ContextChain {
            upstream: self,
            msg: msg.into(),
        }
    }
}

// Blanket implementation for all TryReader types
impl<R: TryReader + ?Sized> TryReaderExt for R {}
