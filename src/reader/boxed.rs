//! Type-erased readers for opt-in erasure.
//!
//! Use `AnyReader` when you need to:
//! - Store different reader pipelines in a collection
//! - Return different pipelines from match arms
//! - Name a pipeline's type in a struct field or function signature
//!
//! Erasure costs one reference-counted allocation and one dynamic call per
//! `run`. Everywhere else, combinators stay zero-cost.

use std::rc::Rc;
use std::sync::Arc;

use crate::reader::trait_def::Reader;

/// A type-erased, thread-safe reader.
///
/// Holds a single shared closure `&I -> O`. Cloning is cheap: clones share
/// the same closure.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// // Different concrete pipelines, one type.
/// let readers: Vec<AnyReader<i32, String>> = vec![
///     AnyReader::new(|n: &i32| n.to_string()),
///     from_fn(|n: &i32| n * 2).map(|n| format!("doubled: {}", n)).erase_to_any_reader(),
/// ];
///
/// let outputs: Vec<String> = readers.iter().map(|r| r.run(&21)).collect();
/// assert_eq!(outputs, vec!["21", "doubled: 42"]);
/// ```
pub struct AnyReader<I, O> {
    run_fn: Arc<dyn Fn(&I) -> O + Send + Sync>,
}

impl<I, O> AnyReader<I, O> {
    /// Create an erased reader directly from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&I) -> O + Send + Sync + 'static,
    {
        AnyReader {
            run_fn: Arc::new(f),
        }
    }

    /// Erase any thread-safe reader.
    ///
    /// Only the reader's `run` behavior is kept; its concrete type is gone.
    pub fn erase<R>(reader: R) -> Self
    where
        R: Reader<Input = I, Output = O> + Send + Sync + 'static,
    {
        AnyReader::new(move |input: &I| reader.run(input))
    }
}

impl<I, O> Clone for AnyReader<I, O> {
    fn clone(&self) -> Self {
        AnyReader {
            run_fn: Arc::clone(&self.run_fn),
        }
    }
}

impl<I, O> std::fmt::Debug for AnyReader<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyReader")
            .field("run_fn", &"<function>")
            .finish()
    }
}

impl<I, O> Reader for AnyReader<I, O> {
    type Input = I;
    type Output = O;

    fn run(&self, input: &I) -> O {
        (self.run_fn)(input)
    }
}

/// A type-erased reader that is not `Send` or `Sync`.
///
/// Use `AnyLocalReader` when a closure in the pipeline captures
/// single-threaded state such as `Rc` or `RefCell`.
pub struct AnyLocalReader<I, O> {
    run_fn: Rc<dyn Fn(&I) -> O>,
}

impl<I, O> AnyLocalReader<I, O> {
    /// Create an erased local reader directly from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&I) -> O + 'static,
    {
        AnyLocalReader { run_fn: Rc::new(f) }
    }

    /// Erase any reader.
    pub fn erase<R>(reader: R) -> Self
    where
        R: Reader<Input = I, Output = O> + 'static,
    {
        AnyLocalReader::new(move |input: &I| reader.run(input))
    }
}

impl<I, O> Clone for AnyLocalReader<I, O> {
    fn clone(&self) -> Self {
        AnyLocalReader {
            run_fn: Rc::clone(&self.run_fn),
        }
    }
}

impl<I, O> std::fmt::Debug for AnyLocalReader<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyLocalReader")
            .field("run_fn", &"<function>")
            .finish()
    }
}

impl<I, O> Reader for AnyLocalReader<I, O> {
    type Input = I;
    type Output = O;

    fn run(&self, input: &I) -> O {
        (self.run_fn)(input)
    }
}

impl<I: 'static, O: 'static> From<AnyReader<I, O>> for AnyLocalReader<I, O> {
    fn from(reader: AnyReader<I, O>) -> Self {
        AnyLocalReader {
            run_fn: Rc::new(move |input: &I| (reader.run_fn)(input)),
        }
    }
}
