//! Demonstrates tracing integration with readers
//!
//! Run with: cargo run --example tracing_demo --features tracing

use tributary::prelude::*;
use tributary::reader::Instrument;

#[derive(Debug, Clone)]
struct Request {
    path: String,
    user: Option<String>,
}

type Route = Instrument<AnyReader<Request, Result<String, ContextError<String>>>>;

fn authenticate() -> AnyReader<Request, Result<String, String>> {
    from_fn(|req: &Request| req.user.clone().ok_or_else(|| "anonymous request".to_string()))
        .tap(|user| tracing::debug!(?user, "authenticated"))
        .erase_to_any_reader()
}

fn render_page() -> Route {
    authenticate()
        .context("authenticating")
        .map_success(|user| format!("welcome, {}", user))
        .erase_to_any_reader()
        .instrument(tracing::info_span!("render_page"))
}

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    let route = render_page();
    let requests = vec![
        Request {
            path: "/home".to_string(),
            user: Some("ada".to_string()),
        },
        Request {
            path: "/home".to_string(),
            user: None,
        },
    ];

    for request in &requests {
        match route.run(request) {
            Ok(page) => tracing::info!(path = %request.path, "served: {}", page),
            Err(e) => tracing::warn!(path = %request.path, "rejected: {}", e),
        }
    }

    // Failure capture points emit debug events inside the active span
    let parse = from_fn(|raw: &String| raw.clone())
        .try_map(|raw| raw.parse::<u32>())
        .instrument(tracing::debug_span!("parse_port"));
    tracing::info!("Parsed port: {:?}", parse.run(&"not-a-port".to_string()));
}
