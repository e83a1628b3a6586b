//! Person Pipeline Example
//!
//! Demonstrates building reader pipelines over a `Person` input:
//! - Observing intermediate values with `tap`
//! - Introducing failure with `try_map` and working inside it with `map_success`
//! - Adapting the input with `try_pullback`
//! - Erasing pipelines to a single `AnyReader` type

use tributary::prelude::*;

#[derive(Debug, Clone)]
struct Person {
    first_name: String,
    last_name: String,
}

#[derive(Debug)]
struct NameError(&'static str);

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for NameError {}

fn full_name() -> AnyReader<Person, String> {
    AnyReader::new(|person: &Person| format!("{} {}", person.first_name, person.last_name))
}

// ==================== Example 1: Tap and Map ====================

fn example_tap_and_map(person: &Person) {
    println!("\n=== Example 1: Tap and Map ===");

    let shout = full_name()
        .tap(|name| println!("1. processing the person: {}", name))
        .map(|name| format!("{}!", name))
        .erase_to_any_reader();

    println!("result: {}", shout.run(person));
}

// ==================== Example 2: Failure as Data ====================

fn example_try_map(people: &[Person]) {
    println!("\n=== Example 2: Failure as Data ===");

    let counted = full_name()
        .tap(|name| println!("2. processing the person: {}", name))
        .try_map(|name| {
            if name.len() == 5 {
                Err(NameError("five characters is not a real name"))
            } else {
                Ok(name.len())
            }
        })
        .map_success(|count| format!("the count was: {}", count))
        .erase_to_any_reader();

    for person in people {
        match counted.run(person) {
            Ok(message) => println!("ok: {}", message),
            Err(err) => println!("failed: {}", err),
        }
    }
}

// ==================== Example 3: Try Pullback ====================

fn example_try_pullback(people: Vec<Person>) {
    println!("\n=== Example 3: Try Pullback ===");

    let first = full_name().try_pullback(|people: &Vec<Person>| {
        people
            .first()
            .cloned()
            .ok_or(NameError("there is nobody here"))
    });

    println!("{:?}", first.run(&people));
    println!("{:?}", first.run(&Vec::new()));
}

// ==================== Example 4: Context and Fold ====================

fn example_context_and_fold(people: &[Person]) {
    println!("\n=== Example 4: Context and Fold ===");

    let initials = full_name()
        .try_map(|name| {
            let mut words = name.split_whitespace();
            match (words.next(), words.next()) {
                (Some(first), Some(last)) => Ok(format!(
                    "{}.{}.",
                    first.chars().next().unwrap_or('?'),
                    last.chars().next().unwrap_or('?')
                )),
                _ => Err(NameError("need a first and last name")),
            }
        })
        .context("computing initials")
        .fold(|initials| initials, |err| format!("<{}>", err));

    for person in people {
        println!("{}", initials.run(person));
    }
}

fn main() {
    println!("Person Pipeline Examples");
    println!("========================");

    let foo_bar = Person {
        first_name: "foo".to_string(),
        last_name: "bar".to_string(),
    };
    let ab_cd = Person {
        first_name: "ab".to_string(),
        last_name: "cd".to_string(),
    };
    let nameless = Person {
        first_name: String::new(),
        last_name: "solo".to_string(),
    };

    example_tap_and_map(&foo_bar);
    example_try_map(&[foo_bar.clone(), ab_cd.clone()]);
    example_try_pullback(vec![foo_bar.clone(), ab_cd]);
    example_context_and_fold(&[foo_bar, nameless]);

    println!("\n=== All examples completed! ===");
}
