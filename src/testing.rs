//! Testing utilities for code built on readers.
//!
//! - [`Probe`] records what a `tap` observer saw, so tests can assert on call
//!   counts and values without hand-rolling shared state.
//! - [`laws`] (feature `proptest`) checks the algebraic laws every reader
//!   pipeline should satisfy, for use inside `proptest!` blocks.
//!
//! # Examples
//!
//! ```rust
//! use tributary::reader::prelude::*;
//! use tributary::testing::Probe;
//!
//! let probe = Probe::new();
//! let reader = from_fn(|n: &i32| n * 2).tap(probe.observer());
//!
//! assert_eq!(reader.run(&4), 8);
//! assert_eq!(reader.run(&5), 10);
//! assert_eq!(probe.values(), vec![8, 10]);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

/// A recording observer for [`ReaderExt::tap`](crate::reader::ReaderExt::tap).
///
/// Clones share the same record, so the probe can stay in the test while
/// its observer moves into the pipeline.
#[derive(Debug)]
pub struct Probe<T> {
    seen: Arc<Mutex<Vec<T>>>,
}

impl<T> Probe<T> {
    /// Create an empty probe.
    pub fn new() -> Self {
        Probe {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of values observed so far.
    pub fn calls(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forget everything observed so far.
    pub fn clear(&self) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<T: Clone> Probe<T> {
    /// An observer closure that records a clone of every value it sees.
    pub fn observer(&self) -> impl Fn(&T) + Clone + Send + Sync + 'static
    where
        T: Send + 'static,
    {
        let seen = Arc::clone(&self.seen);
        move |value: &T| {
            seen.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(value.clone());
        }
    }

    /// All observed values, oldest first.
    pub fn values(&self) -> Vec<T> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recently observed value.
    pub fn last(&self) -> Option<T> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl<T> Clone for Probe<T> {
    fn clone(&self) -> Self {
        Probe {
            seen: Arc::clone(&self.seen),
        }
    }
}

impl<T> Default for Probe<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Law checks for reader pipelines.
///
/// Each function runs the two sides of one law against a single input and
/// fails the current proptest case if they differ.
///
/// # Example
///
/// ```rust
/// use proptest::prelude::*;
/// use tributary::reader::prelude::*;
/// use tributary::testing::laws;
///
/// proptest! {
///     #[test]
///     fn to_string_obeys_map_identity(n in any::<i64>()) {
///         let reader = from_fn(|n: &i64| n.to_string());
///         laws::map_identity(&reader, &n)?;
///     }
/// }
/// # fn main() {}
/// ```
#[cfg(feature = "proptest")]
pub mod laws {
    use std::fmt::Debug;

    use proptest::prelude::*;
    use proptest::test_runner::TestCaseError;

    use super::Probe;
    use crate::reader::{Reader, ReaderExt};

    /// `reader.map(identity).run(x) == reader.run(x)`
    pub fn map_identity<R>(reader: &R, input: &R::Input) -> Result<(), TestCaseError>
    where
        R: Reader,
        R::Output: PartialEq + Debug,
    {
        prop_assert_eq!(reader.map(|value| value).run(input), reader.run(input));
        Ok(())
    }

    /// `reader.map(f).map(g).run(x) == reader.map(|v| g(f(v))).run(x)`
    pub fn map_composition<R, F, G, B, C>(
        reader: &R,
        f: F,
        g: G,
        input: &R::Input,
    ) -> Result<(), TestCaseError>
    where
        R: Reader,
        F: Fn(R::Output) -> B,
        G: Fn(B) -> C,
        C: PartialEq + Debug,
    {
        let chained = reader.map(&f).map(&g).run(input);
        let composed = reader.map(|value| g(f(value))).run(input);
        prop_assert_eq!(chained, composed);
        Ok(())
    }

    /// `reader.flat_map(f).run(x) == f(reader.run(x)).run(x)`
    pub fn flat_map_rethreads_input<R, F, R2>(
        reader: &R,
        f: F,
        input: &R::Input,
    ) -> Result<(), TestCaseError>
    where
        R: Reader,
        F: Fn(R::Output) -> R2,
        R2: Reader<Input = R::Input>,
        R2::Output: PartialEq + Debug,
    {
        let expected = f(reader.run(input)).run(input);
        prop_assert_eq!(reader.flat_map(&f).run(input), expected);
        Ok(())
    }

    /// `reader.tap(observe).run(x) == reader.run(x)`, with `observe` called
    /// exactly once with that value.
    pub fn tap_transparent<R>(reader: &R, input: &R::Input) -> Result<(), TestCaseError>
    where
        R: Reader,
        R::Output: Clone + PartialEq + Debug + Send + 'static,
    {
        let probe = Probe::new();
        let tapped = reader.tap(probe.observer()).run(input);
        let plain = reader.run(input);

        let last = probe.last();
        prop_assert_eq!(probe.calls(), 1);
        prop_assert_eq!(last.as_ref(), Some(&plain));
        prop_assert_eq!(tapped, plain);
        Ok(())
    }

    /// `reader.pullback(g).run(j) == reader.run(&g(j))`
    pub fn pullback_contravariant<R, G, J>(
        reader: &R,
        g: G,
        input: &J,
    ) -> Result<(), TestCaseError>
    where
        R: Reader,
        G: Fn(&J) -> R::Input,
        R::Output: PartialEq + Debug,
    {
        let expected = reader.run(&g(input));
        prop_assert_eq!(reader.pullback(&g).run(input), expected);
        Ok(())
    }

    /// `reader.erase_to_any_local_reader().run(x) == reader.run(x)`
    pub fn erasure_fidelity<R>(reader: &R, input: &R::Input) -> Result<(), TestCaseError>
    where
        R: Reader + Clone + 'static,
        R::Output: PartialEq + Debug,
    {
        let erased = reader.clone().erase_to_any_local_reader();
        prop_assert_eq!(erased.run(input), reader.run(input));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::prelude::*;

    #[test]
    fn probe_starts_empty() {
        let probe = Probe::<i32>::new();
        assert_eq!(probe.calls(), 0);
        assert_eq!(probe.last(), None);
    }

    #[test]
    fn probe_records_each_run() {
        let probe = Probe::new();
        let reader = from_fn(|s: &String| s.len()).tap(probe.observer());

        reader.run(&"a".to_string());
        reader.run(&"abc".to_string());

        assert_eq!(probe.calls(), 2);
        assert_eq!(probe.values(), vec![1, 3]);
        assert_eq!(probe.last(), Some(3));
    }

    #[test]
    fn probe_clones_share_record() {
        let probe = Probe::new();
        let other = probe.clone();
        (probe.observer())(&"x");

        assert_eq!(other.values(), vec!["x"]);
        other.clear();
        assert_eq!(probe.calls(), 0);
    }

    #[test]
    fn probe_observer_survives_erasure() {
        let probe = Probe::new();
        let reader = from_fn(|n: &u8| n.to_string())
            .tap(probe.observer())
            .erase_to_any_reader();

        let handle = std::thread::spawn(move || reader.run(&7));
        assert_eq!(handle.join().ok(), Some("7".to_string()));
        assert_eq!(probe.values(), vec!["7".to_string()]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::testing::laws;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn laws_hold_for_to_string(n in any::<i64>()) {
                let reader = from_fn(|n: &i64| n.to_string());

                laws::map_identity(&reader, &n)?;
                laws::map_composition(&reader, |s: String| s.len(), |len: usize| len * 2, &n)?;
                laws::tap_transparent(&reader, &n)?;
                laws::erasure_fidelity(&reader, &n)?;
            }

            #[test]
            fn laws_hold_for_flat_map_and_pullback(s in ".{0,16}") {
                let reader = from_fn(|s: &String| s.len());

                laws::flat_map_rethreads_input(
                    &reader,
                    |len| from_fn(move |s: &String| format!("{}:{}", len, s)),
                    &s,
                )?;
                laws::pullback_contravariant(&reader, |v: &Vec<String>| v.concat(), &vec![s.clone(), s])?;
            }
        }
    }
}
