use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; without it the crate logs at `info`.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("cashflow_core=info"));

        fmt().with_env_filter(filter).init();
    });
}
