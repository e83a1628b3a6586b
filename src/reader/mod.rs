//! Zero-cost Reader trait with opt-in type erasure.
//!
//! A reader is a computation from an `Input` to an `Output`. This module
//! provides the [`Reader`] trait, a closed set of combinators that build new
//! readers out of existing ones, and [`AnyReader`] for when a single
//! nameable type is needed.
//!
//! # Zero-Cost by Default
//!
//! ```rust
//! use tributary::reader::prelude::*;
//!
//! // No heap allocation - the compiler can inline everything
//! let reader = from_fn(|n: &i64| n.to_string())   // FromFn<...>
//!     .map(|s| s.len())                          // Map<FromFn<...>, ...>
//!     .tap(|len| assert!(*len > 0));             // Tap<Map<...>, ...>
//!
//! assert_eq!(reader.run(&999_999_999), 9);
//! ```
//!
//! Nothing runs while a pipeline is being built. Each `run` call walks the
//! chain: a combinator runs its upstream reader, then applies its own
//! closure to the result.
//!
//! # Failure as Data
//!
//! Plain combinators (`map`, `flat_map`, `pullback`, `tap`) have no failure
//! channel; a panic in their closures simply propagates. Failure enters a
//! pipeline through `try_map` or `try_pullback` as a `Result` output, after
//! which the failure-aware combinators on [`TryReaderExt`] apply:
//!
//! ```rust
//! use tributary::reader::prelude::*;
//!
//! let reader = from_fn(|n: &i64| n.to_string())
//!     .try_map(|s| if s.len() == 1 { Err("single digit") } else { Ok(s.len()) })
//!     .map_success(|len| len * 10)
//!     .replace_error(0);
//!
//! assert_eq!(reader.run(&1), 0);
//! assert_eq!(reader.run(&10), 20);
//! ```
//!
//! # When to Erase
//!
//! Erasure is needed in the same places it is for iterators and futures:
//!
//! ```rust
//! use tributary::reader::prelude::*;
//!
//! fn describe(verbose: bool) -> AnyReader<i32, String> {
//!     if verbose {
//!         from_fn(|n: &i32| format!("the number {}", n)).erase_to_any_reader()
//!     } else {
//!         AnyReader::new(|n: &i32| n.to_string())
//!     }
//! }
//!
//! assert_eq!(describe(true).run(&3), "the number 3");
//! assert_eq!(describe(false).run(&3), "3");
//! ```

pub mod boxed;
pub mod combinators;
pub mod constructors;
pub mod ext;
pub mod prelude;
#[cfg(feature = "tracing")]
pub mod tracing;
mod trait_def;
pub mod try_ext;

// Re-export core traits
pub use trait_def::{Reader, TryReader};

// Re-export extension traits
pub use ext::ReaderExt;
pub use try_ext::TryReaderExt;

// Re-export erased types
pub use boxed::{AnyLocalReader, AnyReader};

// Re-export all combinator types
pub use combinators::{
    Ask, Context, ContextChain, FlatMap, Fold, FromFn, Map, MapFailure, MapSuccess, Pullback,
    Pure, ReplaceError, ReplaceErrorWith, Tap, TryMap, TryMapSuccess, TryPullback,
};

// Re-export constructors
pub use constructors::{ask, from_fn, pure};

// Re-export tracing (when tracing feature is enabled)
#[cfg(feature = "tracing")]
pub use self::tracing::{Instrument, ReaderTracingExt};

#[cfg(test)]
mod tests;
