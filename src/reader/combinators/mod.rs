//! Zero-cost combinator types for reader composition.
//!
//! This module contains the concrete types returned by reader combinators.
//! None of them allocate; each one owns its upstream reader and its closure
//! and can be optimized away by the compiler.
//!
//! Most users won't need to name these types directly. Instead, use the
//! combinator methods on `ReaderExt` and `TryReaderExt`, and reach for
//! `erase_to_any_reader()` when a single nameable type is needed.

mod ask;
mod context;
mod flat_map;
mod fold;
mod from_fn;
mod map;
mod map_failure;
mod map_success;
mod pullback;
mod pure;
mod replace_error;
mod tap;
mod try_map;
mod try_map_success;
mod try_pullback;

pub use ask::Ask;
pub use context::{Context, ContextChain};
pub use flat_map::FlatMap;
pub use fold::Fold;
pub use from_fn::FromFn;
pub use map::Map;
pub use map_failure::MapFailure;
pub use map_success::MapSuccess;
pub use pullback::Pullback;
pub use pure::Pure;
pub use replace_error::{ReplaceError, ReplaceErrorWith};
pub use tap::Tap;
pub use try_map::TryMap;
pub use try_map_success::TryMapSuccess;
pub use try_pullback::TryPullback;
