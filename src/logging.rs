//! Diagnostic tracing for the `greetings` binary.
//!
//! Library code only emits events. Targets worth filtering on:
//!
//! - `greetings::approximation`: one `TRACE` event per Newton step
//!   (`iteration`, `estimate`) and a `DEBUG` summary per call.
//! - `greetings::greetings`: a `DEBUG` event naming the phrasing picked.
//! - `greetings::config`: `DEBUG` events for where settings came from.
//!
//! Results themselves go to stdout and are never affected by the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "warn";

fn filter_or_default(from_env: Option<EnvFilter>) -> EnvFilter {
    from_env.unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=greetings::approximation=trace greetings sqrt 2000
/// ```
pub fn init() {
    let filter = filter_or_default(EnvFilter::try_from_default_env().ok());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time().compact())
        .init();
}
