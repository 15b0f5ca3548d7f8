use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default directive when neither `RUST_LOG` nor `[log] filter` is set.
const DEFAULT_FILTER: &str = "warn";
/// Default directive when probe tracing was requested, so the probes show.
const TRACE_FILTER: &str = "warn,summit_core=debug";

/// Log to stderr so stdout carries only the report.
///
/// Filter precedence: `RUST_LOG`, then the config directive, then a default
/// that depends on whether probe tracing was requested.
pub fn init_tracing(config_filter: Option<String>, trace_requested: bool) {
    let fallback = if trace_requested {
        TRACE_FILTER
    } else {
        DEFAULT_FILTER
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| match config_filter.as_deref() {
            Some(directive) => EnvFilter::try_new(directive),
            None => EnvFilter::try_new(fallback),
        })
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();
}
