use std::sync::Once;

/// Logger setup for binaries using the crate.
///
/// `filter` uses the `env_logger` syntax, e.g. "debug" or "tiny_gl=trace".
/// Without it `RUST_LOG` is honoured, and failing that everything at info and above is shown.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(log::LevelFilter::Info),
        };
        // Another logger may already be installed, e.g. by a test harness.
        if builder.try_init().is_err() {
            return;
        }
        log::debug!("logging initialized");
    });
}
