//! Failure values with a trail of pipeline stages.
//!
//! Once a failure has been captured by `try_map`, `try_pullback` or
//! `try_map_success`, it is ordinary data flowing through the pipeline. By
//! the time it reaches the caller, it is often unclear which stage produced
//! it. `ContextError` wraps the failure together with the stages it passed
//! through, innermost first.
//!
//! # Examples
//!
//! ```
//! use tributary::ContextError;
//!
//! let err = ContextError::new("missing field `port`")
//!     .context("decoding settings")
//!     .context("starting server");
//!
//! assert_eq!(err.inner(), &"missing field `port`");
//! assert_eq!(err.context_trail(), &["decoding settings", "starting server"]);
//! ```
//!
//! ## With Readers
//!
//! ```
//! use tributary::reader::prelude::*;
//!
//! let port = from_fn(|raw: &String| raw.trim().parse::<u16>())
//!     .context("parsing port")
//!     .context_chain("reading listener address");
//!
//! let err = port.run(&"eighty".to_string()).unwrap_err();
//! assert_eq!(err.context_trail().len(), 2);
//! assert_eq!(port.run(&" 80 ".to_string()), Ok(80));
//! ```

use std::error::Error as StdError;
use std::fmt;

/// The common error channel for pipelines that mix failure sources.
///
/// Any `std::error::Error + Send + Sync` converts into it with `?` or
/// `Into`, which makes it a natural error type for
/// [`try_map_success`](crate::reader::TryReaderExt::try_map_success).
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A failure plus the pipeline stages it passed through.
///
/// Display renders the failure followed by one indented line per stage:
///
/// ```
/// use tributary::ContextError;
///
/// let err = ContextError::new("not a number").context("parsing port");
/// assert_eq!(err.to_string(), "not a number\n  during: parsing port");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError<E> {
    error: E,
    trail: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap a failure with an empty trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            trail: Vec::new(),
        }
    }

    /// Record one more stage. Stages are kept in the order they are added.
    pub fn context(mut self, stage: impl Into<String>) -> Self {
        self.trail.push(stage.into());
        self
    }

    /// The wrapped failure.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Discard the trail and return the wrapped failure.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// All recorded stages, innermost first.
    pub fn context_trail(&self) -> &[String] {
        &self.trail
    }

    /// Transform the wrapped failure, keeping the trail.
    pub fn map_inner<E2>(self, f: impl FnOnce(E) -> E2) -> ContextError<E2> {
        ContextError {
            error: f(self.error),
            trail: self.trail,
        }
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        for stage in &self.trail {
            write!(f, "\n  during: {}", stage)?;
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}
