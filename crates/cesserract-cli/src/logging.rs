//! Tracing subscriber setup
//!
//! Log records go to stderr so program output on stdout stays clean.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when neither the environment nor `--verbose` asks for more
const DEFAULT_FILTER: &str = "warn";

/// Choose the filter directive for this invocation
pub fn filter_directive(configured: Option<&str>, verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    configured.unwrap_or(DEFAULT_FILTER).to_string()
}

/// Install the global subscriber
pub fn init(configured: Option<&str>, verbose: bool) {
    let directive = filter_directive(configured, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("warning: invalid log filter '{}': {}", directive, e);
        EnvFilter::new(DEFAULT_FILTER)
    });

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init();
}
