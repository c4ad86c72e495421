use std::sync::Once;

/// Logger configuration.
///
/// `filter` uses the `env_logger` filter syntax, e.g. "info" or
/// "spinner=debug,gl_wrapper=warn". When unset, `RUST_LOG` is consulted.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

static INIT: Once = Once::new();

/// Initializes the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
