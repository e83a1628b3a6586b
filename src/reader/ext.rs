//! Extension trait providing combinator methods for all Readers.
//!
//! The `ReaderExt` trait is automatically implemented for all types
//! that implement `Reader`. It provides ergonomic combinator methods
//! like `map`, `flat_map`, `pullback`, `tap`, `try_map`, and erasure.

use crate::reader::boxed::{AnyLocalReader, AnyReader};
use crate::reader::combinators::{FlatMap, Map, Pullback, Tap, TryMap, TryPullback};
use crate::reader::trait_def::Reader;

/// Extension trait providing combinator methods for all Readers.
///
/// This trait is automatically implemented for all types that implement `Reader`.
/// You don't need to implement this trait yourself.
///
/// Every method wraps `self` in a new reader; nothing runs until `run` is
/// called on the result.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// struct Person {
///     name: String,
/// }
///
/// let greeting = from_fn(|len: &usize| format!("{} letters", len))
///     .pullback(|person: &Person| person.name.len())
///     .map(|s| format!("{}!", s))
///     .erase_to_any_reader();
///
/// let person = Person { name: "hello world!".to_string() };
/// assert_eq!(greeting.run(&person), "12 letters!");
/// ```
pub trait ReaderExt: Reader {
    /// Transform the output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::reader::prelude::*;
    ///
    /// let reader = from_fn(|n: &i64| n.to_string()).map(|s| s.len());
    /// assert_eq!(reader.run(&999_999_999), 9);
    /// ```
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        Map { upstream: self, f }
    }

    /// Chain a dependent reader.
    ///
    /// The reader returned by `f` is run against the **same input** this
    /// reader received, not against this reader's output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::reader::prelude::*;
    ///
    /// #[derive(Clone)]
    /// struct Config { verbose: bool, name: String }
    ///
    /// let reader = from_fn(|c: &Config| c.verbose).flat_map(|verbose| {
    ///     if verbose {
    ///         AnyReader::new(|c: &Config| format!("hello, {}!", c.name))
    ///     } else {
    ///         AnyReader::new(|c: &Config| c.name.clone())
    ///     }
    /// });
    ///
    /// let config = Config { verbose: true, name: "world".to_string() };
    /// assert_eq!(reader.run(&config), "hello, world!");
    /// ```
    fn flat_map<R2, F>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        R2: Reader<Input = Self::Input>,
        F: Fn(Self::Output) -> R2,
    {
        FlatMap { upstream: self, f }
    }

    /// Accept a different input type by first narrowing it to this reader's
    /// input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::reader::prelude::*;
    ///
    /// let reader = from_fn(|n: &usize| n.to_string()).pullback(|s: &String| s.len());
    /// assert_eq!(reader.run(&"foo".to_string()), "3");
    /// ```
    fn pullback<J, F>(self, f: F) -> Pullback<Self, F, J>
    where
        Self: Sized,
        F: Fn(&J) -> Self::Input,
    {
        Pullback::new(self, f)
    }

    /// Like [`pullback`](ReaderExt::pullback), but the narrowing may fail.
    ///
    /// On failure the error becomes the output and this reader never runs.
    /// On success the output is wrapped in `Ok`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::reader::prelude::*;
    ///
    /// let first_len = from_fn(|s: &String| s.len())
    ///     .try_pullback(|names: &Vec<String>| names.first().cloned().ok_or("no names"));
    ///
    /// assert_eq!(first_len.run(&vec!["ada".to_string()]), Ok(3));
    /// assert_eq!(first_len.run(&vec![]), Err("no names"));
    /// ```
    fn try_pullback<J, E, F>(self, f: F) -> TryPullback<Self, F, J>
    where
        Self: Sized,
        F: Fn(&J) -> Result<Self::Input, E>,
    {
        TryPullback::new(self, f)
    }

    /// Observe the output without changing it.
    ///
    /// `f` is called exactly once per run with a reference to the value
    /// that is then returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use tributary::reader::prelude::*;
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let reader = from_fn(|n: &i32| n.to_string()).tap(|s| seen.borrow_mut().push(s.clone()));
    ///
    /// assert_eq!(reader.run(&9), "9");
    /// assert_eq!(*seen.borrow(), vec!["9".to_string()]);
    /// ```
    fn tap<F>(self, f: F) -> Tap<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output),
    {
        Tap { upstream: self, f }
    }

    /// Apply a fallible transformation, capturing failure as data.
    ///
    /// This is how a failure channel enters a pipeline that had none. The
    /// result is a [`TryReader`](crate::reader::TryReader), so the
    /// failure-aware combinators on
    /// [`TryReaderExt`](crate::reader::try_ext::TryReaderExt) become available.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::reader::prelude::*;
    ///
    /// let reader = from_fn(|s: &String| s.clone()).try_map(|s| s.parse::<i32>());
    /// assert_eq!(reader.run(&"42".to_string()), Ok(42));
    /// assert!(reader.run(&"forty-two".to_string()).is_err());
    /// ```
    fn try_map<B, E, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<B, E>,
    {
        TryMap { upstream: self, f }
    }

    /// Convert to a thread-safe [`AnyReader`] for type erasure.
    ///
    /// Use this when you need to:
    /// - Store pipelines in collections
    /// - Return different pipelines from match arms
    /// - Name a pipeline's type
    fn erase_to_any_reader(self) -> AnyReader<Self::Input, Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        AnyReader::erase(self)
    }

    /// Convert to an [`AnyLocalReader`] for type erasure of readers that
    /// are not thread-safe.
    fn erase_to_any_local_reader(self) -> AnyLocalReader<Self::Input, Self::Output>
    where
        Self: Sized + 'static,
    {
        AnyLocalReader::erase(self)
    }
}

// Blanket implementation for all Reader types
impl<R: Reader + ?Sized> ReaderExt for R {}
