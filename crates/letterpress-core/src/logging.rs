use tracing_subscriber::EnvFilter;

/// Filter used by [`init`] when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,letterpress=debug,letterpress_render=debug,png=warn";

/// Install a fmt subscriber. `RUST_LOG` takes precedence over [`DEFAULT_FILTER`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Install a fmt subscriber with an explicit filter, ignoring `RUST_LOG`.
pub fn init_with_filter(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}
