use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging system
pub fn init_logger(level: &str, json_output: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if json_output {
        // JSON formatting for machine consumption
        registry.with(fmt::layer().json()).init();
    } else {
        // Pretty formatting for development
        registry.with(fmt::layer().pretty()).init();
    }
}

/// Initialize logger from config
pub fn init_from_config(config: &crate::utils::config::LoggingConfig) {
    init_logger(&config.level, config.output == "json");
}
