//! Tests for the Reader trait and its combinators.

use std::cell::{Cell, RefCell};

use crate::context::{BoxError, ContextError};
use crate::reader::prelude::*;
use crate::reader::FromFn;

fn to_text() -> FromFn<fn(&i64) -> String, i64> {
    let f: fn(&i64) -> String = |n| n.to_string();
    FromFn::new(f)
}

#[derive(Debug, PartialEq)]
struct MyError {
    description: String,
}

impl MyError {
    fn new(description: &str) -> Self {
        MyError {
            description: description.to_string(),
        }
    }
}

// Constructor tests
#[test]
fn test_from_fn_runs_closure() {
    assert_eq!(to_text().run(&2), "2");
}

#[test]
fn test_reader_is_reusable() {
    let reader = to_text();
    assert_eq!(reader.run(&1), "1");
    assert_eq!(reader.run(&1), "1");
    assert_eq!(reader.run(&22), "22");
}

#[test]
fn test_ask_returns_input() {
    assert_eq!(ask::<String>().run(&"env".to_string()), "env");
}

#[test]
fn test_pure_ignores_input() {
    let reader = pure::<_, i64>(vec![1, 2]);
    assert_eq!(reader.run(&0), vec![1, 2]);
    assert_eq!(reader.run(&99), vec![1, 2]);
}

// Map tests
#[test]
fn test_map_transforms_output() {
    assert_eq!(to_text().map(|s| s.len()).run(&999_999_999), 9);
}

#[test]
fn test_map_chain_applies_in_order() {
    let reader = to_text().map(|s| format!("{}!", s)).map(|s| s.repeat(2));
    assert_eq!(reader.run(&7), "7!7!");
}

// FlatMap tests
#[test]
fn test_flat_map_selects_continuation() {
    let foo = AnyReader::new(|n: &i64| format!("foo: {}", n));
    let bar = AnyReader::new(|n: &i64| format!("bar: {}", n));
    let reader = to_text().flat_map(move |s| if s == "1" { foo.clone() } else { bar.clone() });

    assert_eq!(reader.run(&1), "foo: 1");
    assert_eq!(reader.run(&99), "bar: 99");
}

#[test]
fn test_flat_map_continuation_sees_original_input() {
    // The continuation gets the original number, not the intermediate text.
    let reader = to_text().flat_map(|s| from_fn(move |n: &i64| (s.clone(), n * 10)));
    assert_eq!(reader.run(&4), ("4".to_string(), 40));
}

#[test]
fn test_flat_map_runs_upstream_once() {
    let calls = Cell::new(0);
    let reader = from_fn(|n: &i32| {
        calls.set(calls.get() + 1);
        *n
    })
    .flat_map(|_| pure::<_, i32>("done"));

    assert_eq!(reader.run(&1), "done");
    assert_eq!(calls.get(), 1);
}

// Pullback tests
#[test]
fn test_pullback_narrows_input() {
    let reader = from_fn(|n: &usize| n.to_string()).pullback(|s: &String| s.len());
    assert_eq!(reader.run(&"foo".to_string()), "3");
}

#[test]
fn test_pullback_then_map() {
    struct MyStruct {
        my_string: String,
    }

    let reader = from_fn(|n: &usize| n.to_string())
        .pullback(|s: &MyStruct| s.my_string.len())
        .map(|s| format!("{}!!?", s));

    let input = MyStruct {
        my_string: "hello world!".to_string(),
    };
    assert_eq!(reader.run(&input), "12!!?");
}

// TryPullback tests
#[test]
fn test_try_pullback_success_wraps_output() {
    let reader = to_text().try_pullback(|v: &Vec<i64>| v.first().copied().ok_or(MyError::new("empty")));
    assert_eq!(reader.run(&vec![5, 6]), Ok("5".to_string()));
}

#[test]
fn test_try_pullback_failure_skips_upstream() {
    let ran = Cell::new(false);
    let reader = from_fn(|n: &i64| {
        ran.set(true);
        *n
    })
    .try_pullback(|v: &Vec<i64>| v.first().copied().ok_or(MyError::new("empty")));

    assert_eq!(reader.run(&vec![]), Err(MyError::new("empty")));
    assert!(!ran.get());
}

// Tap tests
#[test]
fn test_tap_observes_output() {
    let seen = RefCell::new(None);
    let reader = to_text().tap(|s| *seen.borrow_mut() = Some(s.clone()));

    assert_eq!(reader.run(&9), "9");
    assert_eq!(*seen.borrow(), Some("9".to_string()));
}

#[test]
fn test_tap_runs_once_per_run() {
    let count = Cell::new(0);
    let reader = to_text().tap(|_| count.set(count.get() + 1));

    reader.run(&1);
    reader.run(&2);
    assert_eq!(count.get(), 2);
}

#[test]
fn test_tap_passes_failure_through() {
    let seen = RefCell::new(Vec::new());
    let reader = to_text()
        .try_map(|_| Err::<i32, _>(MyError::new("foo")))
        .tap(|r| seen.borrow_mut().push(r.is_err()));

    assert_eq!(reader.run(&1), Err(MyError::new("foo")));
    assert_eq!(*seen.borrow(), vec![true]);
}

// TryMap tests
#[test]
fn test_try_map_success() {
    let reader = to_text().try_map(|s| Ok::<_, MyError>(s.len()));
    assert_eq!(reader.run(&10), Ok(2));
}

#[test]
fn test_try_map_failure_is_captured() {
    let reader = to_text().try_map(|s| {
        if s.len() == 1 {
            Err(MyError::new("single digit"))
        } else {
            Ok(s.len())
        }
    });

    assert_eq!(reader.run(&1), Err(MyError::new("single digit")));
    assert_eq!(reader.run(&10), Ok(2));
}

// Fold tests
#[test]
fn test_fold_dispatches_on_branch() {
    let reader = to_text()
        .try_map(|s| {
            if s == "0" {
                Err(MyError::new("foo"))
            } else {
                Ok(format!("{}!", s))
            }
        })
        .fold(|s| s.len(), |e| e.description.len());

    assert_eq!(reader.run(&1), 2);
    assert_eq!(reader.run(&0), 3);
}

#[test]
fn test_fold_runs_exactly_one_branch() {
    let successes = Cell::new(0);
    let failures = Cell::new(0);
    let reader = from_fn(|n: &i32| if *n > 0 { Ok(*n) } else { Err(*n) }).fold(
        |_| successes.set(successes.get() + 1),
        |_| failures.set(failures.get() + 1),
    );

    reader.run(&1);
    assert_eq!((successes.get(), failures.get()), (1, 0));
    reader.run(&-1);
    assert_eq!((successes.get(), failures.get()), (1, 1));
}

// ReplaceError tests
#[test]
fn test_replace_error_substitutes_failure() {
    let reader = to_text()
        .try_map(|_| Err::<String, _>(MyError::new("foo")))
        .replace_error("bar".to_string());

    assert_eq!(reader.run(&1), "bar");
}

#[test]
fn test_replace_error_keeps_success() {
    let reader = to_text()
        .try_map(|s| Ok::<_, MyError>(s))
        .replace_error("bar".to_string());

    assert_eq!(reader.run(&1), "1");
}

#[test]
fn test_replace_error_with_is_lazy() {
    let calls = Cell::new(0);
    let reader = from_fn(|n: &i32| if *n > 0 { Ok(*n) } else { Err(()) }).replace_error_with(|| {
        calls.set(calls.get() + 1);
        0
    });

    assert_eq!(reader.run(&5), 5);
    assert_eq!(calls.get(), 0);
    assert_eq!(reader.run(&-5), 0);
    assert_eq!(calls.get(), 1);
}

// MapSuccess tests
#[test]
fn test_map_success_transforms_value() {
    let reader = to_text()
        .try_map(|s| Ok::<_, MyError>(s.len()))
        .map_success(|n| n.to_string());

    assert_eq!(reader.run(&999_999_999), Ok("9".to_string()));
}

#[test]
fn test_map_success_passes_failure_through() {
    let called = Cell::new(false);
    let reader = to_text()
        .try_map(|_| Err::<usize, _>(MyError::new("foo")))
        .map_success(|n| {
            called.set(true);
            n + 1
        });

    assert_eq!(reader.run(&1), Err(MyError::new("foo")));
    assert!(!called.get());
}

// MapFailure tests
#[test]
fn test_map_failure_transforms_error() {
    let reader = to_text()
        .try_map(|_| Err::<usize, _>(MyError::new("foo")))
        .map_failure(|e| e.description.len());

    assert_eq!(reader.run(&1), Err(3));
}

#[test]
fn test_map_failure_preserves_success() {
    let reader = to_text()
        .try_map(|s| Ok::<_, MyError>(s.len()))
        .map_failure(|e| e.description);

    assert_eq!(reader.run(&12), Ok(2));
}

// TryMapSuccess tests
#[test]
fn test_try_map_success_captures_new_failure() {
    let reader = to_text()
        .try_map(|s| Ok::<_, MyError>(s.len()))
        .try_map_success(|_| Err::<usize, _>(MyError::new("foo")));

    assert_eq!(reader.run(&0), Err(MyError::new("foo")));
}

#[test]
fn test_try_map_success_short_circuits_on_failure() {
    let called = Cell::new(false);
    let reader = to_text()
        .try_map(|_| Err::<usize, _>(MyError::new("upstream")))
        .try_map_success(|n| {
            called.set(true);
            Ok::<_, MyError>(n)
        });

    assert_eq!(reader.run(&0), Err(MyError::new("upstream")));
    assert!(!called.get());
}

#[test]
fn test_try_map_success_converts_into_box_error() {
    let reader = from_fn(|s: &String| s.clone())
        .try_map(|s| Ok::<_, BoxError>(s))
        .try_map_success(|s| s.parse::<u8>());

    assert_eq!(reader.run(&"12".to_string()).ok(), Some(12));

    let err = reader.run(&"300".to_string()).err().map(|e| e.to_string());
    assert_eq!(err, Some("number too large to fit in target type".to_string()));
}

// Context tests
#[test]
fn test_context_wraps_failure() {
    let reader = from_fn(|_: &i32| Err::<i32, _>("base error")).context("operation failed");

    assert_eq!(
        reader.run(&0),
        Err(ContextError::new("base error").context("operation failed"))
    );
}

#[test]
fn test_context_chain_accumulates() {
    let reader = from_fn(|_: &i32| Err::<i32, _>("base error"))
        .context("step 1")
        .map_success(|n| n + 1)
        .context_chain("step 2")
        .context_chain("step 3");

    match reader.run(&0) {
        Err(err) => {
            assert_eq!(err.inner(), &"base error");
            assert_eq!(err.context_trail(), &["step 1", "step 2", "step 3"]);
        }
        Ok(_) => panic!("Expected error"),
    }
}

#[test]
fn test_context_leaves_success_alone() {
    let reader = from_fn(|n: &i32| Ok::<_, String>(*n)).context("unused");
    assert_eq!(reader.run(&42), Ok(42));
}

// Erasure tests
#[test]
fn test_erase_preserves_behavior() {
    let reader = to_text()
        .map(|s| format!("{}!!?", s))
        .tap(|_| {})
        .erase_to_any_reader();

    assert_eq!(reader.run(&12), "12!!?");
}

#[test]
fn test_erased_readers_share_one_type() {
    let readers: Vec<AnyReader<i64, usize>> = vec![
        to_text().map(|s| s.len()).erase_to_any_reader(),
        AnyReader::new(|n: &i64| *n as usize),
        pure::<usize, i64>(7).erase_to_any_reader(),
    ];

    let outputs: Vec<usize> = readers.iter().map(|r| r.run(&100)).collect();
    assert_eq!(outputs, vec![3, 100, 7]);
}

#[test]
fn test_erased_reader_clone_shares_behavior() {
    let reader = to_text().erase_to_any_reader();
    let clone = reader.clone();
    assert_eq!(reader.run(&5), clone.run(&5));
}

#[test]
fn test_erase_to_local_allows_non_send_state() {
    let log = std::rc::Rc::new(RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&log);
    let reader = to_text()
        .tap(move |s| sink.borrow_mut().push(s.clone()))
        .erase_to_any_local_reader();

    reader.run(&3);
    assert_eq!(*log.borrow(), vec!["3".to_string()]);
}

#[test]
fn test_any_reader_converts_to_local() {
    let local: AnyLocalReader<i64, String> = to_text().erase_to_any_reader().into();
    assert_eq!(local.run(&8), "8");
}

#[test]
fn test_erased_reader_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let reader = to_text().map(|s| s.len()).erase_to_any_reader();
    assert_send_sync(&reader);
}

// Smart pointer tests
#[test]
fn test_references_and_boxes_are_readers() {
    let base = to_text();
    assert_eq!((&base).map(|s| s.len()).run(&10), 2);

    let boxed: Box<dyn Reader<Input = i64, Output = String>> = Box::new(to_text());
    assert_eq!(boxed.map(|s| s + "?").run(&1), "1?");

    let shared = std::sync::Arc::new(to_text());
    assert_eq!(std::sync::Arc::clone(&shared).run(&4), "4");
}

#[test]
fn test_debug_output_hides_closures() {
    let reader = to_text().map(|s| s.len());
    assert_eq!(
        format!("{:?}", reader),
        r#"Map { upstream: "<reader>", f: "<function>" }"#
    );
}
