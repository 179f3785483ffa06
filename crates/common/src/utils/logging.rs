use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset. Keeps sqlx statement logging quiet.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize a compact human-readable subscriber writing to stdout.
/// - Respects `RUST_LOG` if set
/// - Safe to call more than once (later calls are ignored)
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize a JSON subscriber for machine-parsed logs.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Subscriber for tests: captured by the test harness, debug level for the workspace crates.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("warn,service=debug,models=debug"))
        .with_test_writer()
        .try_init();
}
