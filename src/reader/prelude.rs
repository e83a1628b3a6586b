//! Prelude for the reader module.
//!
//! Import everything you need with a single `use`:
//!
//! ```rust
//! use tributary::reader::prelude::*;
//!
//! let reader = from_fn(|n: &i32| n * 2).map(|n| n + 1);
//! assert_eq!(reader.run(&20), 41);
//! ```

pub use crate::reader::boxed::{AnyLocalReader, AnyReader};
pub use crate::reader::constructors::{ask, from_fn, pure};
pub use crate::reader::ext::ReaderExt;
pub use crate::reader::trait_def::{Reader, TryReader};
pub use crate::reader::try_ext::TryReaderExt;

#[cfg(feature = "tracing")]
pub use crate::reader::tracing::ReaderTracingExt;
