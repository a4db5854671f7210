use tracing_subscriber::EnvFilter;

/// Installs the global console subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used, and a filter that
/// fails to parse falls back to `info`.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
