//! Tracing support for readers.
//!
//! This module provides the `Instrument` combinator and `instrument` method
//! for running readers inside tracing spans. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.

use crate::reader::trait_def::Reader;

/// A reader that runs inside a tracing span.
///
/// Created by [`ReaderTracingExt::instrument`].
#[derive(Debug, Clone)]
pub struct Instrument<R> {
    pub(crate) upstream: R,
    pub(crate) span: tracing::Span,
}

impl<R> Reader for Instrument<R>
where
    R: Reader,
{
    type Input = R::Input;
    type Output = R::Output;

    fn run(&self, input: &R::Input) -> R::Output {
        self.span.in_scope(|| self.upstream.run(input))
    }
}

/// Extension trait for adding tracing instrumentation to readers.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait ReaderTracingExt: Reader {
    /// Run this reader inside `span`.
    ///
    /// The span is entered for the duration of each `run` and exited when
    /// it returns. Events emitted by upstream closures and by failure
    /// capture points are recorded inside the span. The output is never
    /// touched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::reader::prelude::*;
    /// use tributary::reader::tracing::ReaderTracingExt;
    /// use tracing::info_span;
    ///
    /// let reader = from_fn(|n: &i32| n * 2).instrument(info_span!("double"));
    /// assert_eq!(reader.run(&21), 42);
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self>
    where
        Self: Sized,
    {
        Instrument {
            upstream: self,
            span,
        }
    }
}

impl<R: Reader + ?Sized> ReaderTracingExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::prelude::*;
    use tracing_test::traced_test;

    #[test]
    fn test_instrument_returns_value() {
        let reader = from_fn(|n: &i32| n + 1).instrument(tracing::info_span!("test_span"));
        assert_eq!(reader.run(&41), 42);
    }

    #[test]
    fn test_failure_in_span_propagates() {
        let reader = from_fn(|_: &i32| Err::<i32, _>("oops".to_string()))
            .instrument(tracing::info_span!("failing"));
        assert_eq!(reader.run(&0), Err("oops".to_string()));
    }

    #[test]
    #[traced_test]
    fn test_events_are_recorded_inside_span() {
        let reader = from_fn(|n: &i32| *n)
            .tap(|n| tracing::info!(value = *n, "observed"))
            .instrument(tracing::info_span!("pipeline"));

        assert_eq!(reader.run(&7), 7);
        assert!(logs_contain("pipeline"));
        assert!(logs_contain("observed"));
        assert!(logs_contain("value=7"));
    }

    #[test]
    #[traced_test]
    fn test_try_map_logs_captured_failure() {
        let reader = from_fn(|n: &i32| *n)
            .try_map(|n| if n < 0 { Err("negative") } else { Ok(n) })
            .instrument(tracing::debug_span!("validate"));

        assert_eq!(reader.run(&-1), Err("negative"));
        assert!(logs_contain("transform failed; capturing failure"));
    }

    #[test]
    #[traced_test]
    fn test_try_map_success_path_is_quiet() {
        let reader = from_fn(|n: &i32| *n).try_map(|n| Ok::<_, String>(n));

        assert_eq!(reader.run(&1), Ok(1));
        assert!(!logs_contain("capturing failure"));
    }

    #[test]
    #[traced_test]
    fn test_try_pullback_logs_skipped_upstream() {
        let reader = from_fn(|s: &String| s.len())
            .try_pullback(|v: &Vec<String>| v.first().cloned().ok_or("empty"));

        assert_eq!(reader.run(&vec![]), Err("empty"));
        assert!(logs_contain("upstream reader skipped"));
    }

    #[test]
    #[traced_test]
    fn test_try_map_success_logs_captured_failure() {
        let reader = from_fn(|s: &String| s.clone())
            .try_map(|s| Ok::<_, String>(s))
            .try_map_success(|s| s.parse::<u8>().map_err(|e| e.to_string()));

        assert!(reader.run(&"many".to_string()).is_err());
        assert!(logs_contain("success transform failed"));
    }

    #[test]
    #[traced_test]
    fn test_try_map_success_upstream_failure_is_quiet() {
        let reader = from_fn(|_: &i32| Err::<String, _>("upstream".to_string()))
            .try_map_success(|s| s.parse::<u8>().map_err(|e| e.to_string()));

        assert_eq!(reader.run(&0), Err("upstream".to_string()));
        assert!(!logs_contain("success transform failed"));
    }
}
