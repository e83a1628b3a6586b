//! FlatMap combinator - chooses the next reader from an intermediate output.

use crate::reader::trait_def::Reader;

/// FlatMap combinator - chains a dependent reader.
///
/// The upstream reader runs first; its output is handed to `f`, which
/// returns the next reader. That reader is then run against the **original
/// input**, not against the intermediate output. The continuation therefore
/// has to accept the same `Input` type as the upstream reader.
///
/// # Example
///
/// ```rust
/// use tributary::reader::prelude::*;
///
/// let foo = AnyReader::new(|n: &i32| format!("foo: {}", n));
/// let bar = AnyReader::new(|n: &i32| format!("bar: {}", n));
///
/// let reader = from_fn(|n: &i32| n.to_string())
///     .flat_map(move |s| if s == "1" { foo.clone() } else { bar.clone() });
///
/// assert_eq!(reader.run(&1), "foo: 1");
/// assert_eq!(reader.run(&99), "bar: 99");
/// ```
#[derive(Clone)]
pub struct FlatMap<R, F> {
    pub(crate) upstream: R,
    pub(crate) f: F,
}

impl<R, F> std::fmt::Debug for FlatMap<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMap")
            .field("upstream", &"<reader>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<R, F, R2> Reader for FlatMap<R, F>
where
    R: Reader,
    F: Fn(R::Output) -> R2,
    R2: Reader<Input = R::Input>,
{
    type Input = R::Input;
    type Output = R2::Output;

    fn run(&self, input: &R::Input) -> R2::Output {
        let next = (self.f)(self.upstream.run(input));
        next.run(input)
    }
}
