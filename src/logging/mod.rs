use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Routes log records to stderr; stdout carries only the banner.
/// `RUST_LOG` overrides the default `warn` level. Call once, from `main`.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();
}
