//! Diagnostic logging.
//!
//! The subscriber is only installed when `ENUMSTR_LOG` (or `RUST_LOG`) is
//! set, e.g. `ENUMSTR_LOG=debug enumstr foo.c`. Output goes to stderr so it
//! never mixes with the generated code on stdout.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ENUMSTR_LOG";

/// `ENUMSTR_LOG` takes precedence over `RUST_LOG`; both use the `RUST_LOG`
/// directive syntax.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var(LOG_ENV) {
        return Some(EnvFilter::builder().parse_lossy(val));
    }
    std::env::var("RUST_LOG")
        .is_ok()
        .then(EnvFilter::from_default_env)
}

pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
