//! # Tributary
//!
//! > *Small streams join into rivers*
//!
//! A Rust library of composable readers: a single-method capability, "run an
//! input, produce an output", plus a closed set of combinators that build new
//! readers out of existing ones.
//!
//! ## Philosophy
//!
//! - **Zero-cost by default**: every combinator returns a concrete type, like
//!   `Iterator` adapters do. Nothing is boxed unless you ask for it.
//! - **Failure is data**: failure enters a pipeline explicitly through
//!   `try_map`/`try_pullback` and from then on travels as a `Result` until it
//!   is folded away.
//! - **Erase at the edges**: `AnyReader` gives a pipeline a single nameable
//!   type for storage, collections and function signatures.
//!
//! ## Quick Example
//!
//! ```rust
//! use tributary::reader::prelude::*;
//!
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! let full_name = from_fn(|p: &Person| format!("{} {}", p.first_name, p.last_name));
//!
//! let summary = full_name
//!     .try_map(|name| if name.len() == 5 { Err("suspiciously short") } else { Ok(name.len()) })
//!     .map_success(|count| format!("the count was: {}", count))
//!     .erase_to_any_reader();
//!
//! let foo_bar = Person { first_name: "foo".into(), last_name: "bar".into() };
//! let ab_cd = Person { first_name: "ab".into(), last_name: "cd".into() };
//!
//! assert_eq!(summary.run(&foo_bar), Ok("the count was: 7".to_string()));
//! assert_eq!(summary.run(&ab_cd), Err("suspiciously short"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: run readers inside tracing spans with
//!   `ReaderTracingExt::instrument`, and emit debug events where failures are
//!   captured.
//! - `proptest`: law-checking helpers in `testing::laws`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod reader;
pub mod testing;

// Re-exports
pub use context::{BoxError, ContextError};
pub use reader::{AnyLocalReader, AnyReader, Reader, ReaderExt, TryReader, TryReaderExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{BoxError, ContextError};
    pub use crate::reader::prelude::*;
}
