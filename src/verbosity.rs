// Maps the 0/1/2 verbosity levels onto a tracing subscriber
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a verbosity level (0=quiet, 1=basic, 2=full).
pub fn default_directive(level: u8) -> &'static str {
    match level {
        0 => "spacetraders_dash=warn,warn",
        1 => "spacetraders_dash=info,warn",
        _ => "spacetraders_dash=debug,info",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the level when set.
pub fn init_logging(level: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}
