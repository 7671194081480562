//! Tracing setup shared by the CLI, tests and benchmarks.

use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVE: &str = "info";

/// Install a subscriber filtered by `RUST_LOG`, falling back to `info`.
///
/// `log` records are bridged into tracing. Events go to stderr so that
/// command output on stdout stays machine readable. Repeated calls are no-ops.
pub fn init() {
    install(env_filter_or(DEFAULT_DIRECTIVE));
}

/// Install a subscriber that drops every event. Repeated calls are no-ops.
pub fn init_for_benchmarks() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("off"))
        .try_init();
}

fn env_filter_or(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

fn install(filter: EnvFilter) {
    let _ = LogTracer::init();

    let events = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init();
}
