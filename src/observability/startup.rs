use crate::config::AppConfig;
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over the `info` default.
pub fn init_tracing() {
    let format = LogFormat::parse(&env::var("LOG_FORMAT").unwrap_or_default());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

pub fn log_startup(config: &AppConfig) {
    if !config.has_bot_token() {
        tracing::error!("BOT_TOKEN is not set; Telegram requests will fail until it is provided");
    }

    tracing::info!(
        api_url = %config.api_url,
        monitored_url = %config.monitored_url,
        poll_interval_secs = config.poll_interval.as_secs(),
        fetch_retry_secs = config.fetch_retry_interval.as_secs(),
        request_timeout_secs = config.request_timeout.as_secs(),
        slow_threshold_ms = config.slow_threshold.as_millis() as u64,
        language = %config.language,
        "Starting uptime bot..."
    );
}
