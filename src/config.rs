use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_MONITORED_URL: &str = "https://www.sibervatan.org/";
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["tr", "en"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Empty when `BOT_TOKEN` is unset; every Telegram call will then fail.
    pub bot_token: String,
    pub api_url: Url,
    pub monitored_url: String,
    pub poll_interval: Duration,
    pub fetch_retry_interval: Duration,
    pub request_timeout: Duration,
    pub slow_threshold: Duration,
    pub language: String,
}

/// Every invalid variable found while reading the environment.
#[derive(Debug)]
pub struct ConfigError {
    pub invalid_vars: Vec<(String, String)>,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Invalid environment variables:")?;
        for (var, err) in &self.invalid_vars {
            writeln!(f, "  - {}: {}", var, err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

fn get_or<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

fn get_u64<F>(lookup: &F, name: &str, default: u64, invalid: &mut Vec<(String, String)>) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    get_or(lookup, name, &default.to_string())
        .parse::<u64>()
        .map_err(|e| {
            invalid.push((name.into(), e.to_string()));
        })
        .unwrap_or(default)
}

fn parse_http_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut invalid = Vec::new();

        let bot_token = get_or(&lookup, "BOT_TOKEN", "");

        let api_url = parse_http_url(&get_or(&lookup, "TELEGRAM_API_URL", DEFAULT_API_URL))
            .map_err(|e| {
                invalid.push(("TELEGRAM_API_URL".into(), e));
            });

        let monitored_url = get_or(&lookup, "MONITORED_URL", DEFAULT_MONITORED_URL);
        if let Err(e) = parse_http_url(&monitored_url) {
            invalid.push(("MONITORED_URL".into(), e));
        }

        let poll_interval = get_u64(&lookup, "POLL_INTERVAL_SECS", 5, &mut invalid);
        let fetch_retry = get_u64(&lookup, "FETCH_RETRY_SECS", 2, &mut invalid);
        let request_timeout = get_u64(&lookup, "REQUEST_TIMEOUT_SECS", 10, &mut invalid);
        if request_timeout == 0 {
            invalid.push(("REQUEST_TIMEOUT_SECS".into(), "must be greater than 0".into()));
        }
        let slow_threshold = get_u64(&lookup, "SLOW_RESPONSE_MS", 100, &mut invalid);

        let language = get_or(&lookup, "BOT_LANGUAGE", "tr").to_lowercase();
        if !SUPPORTED_LANGUAGES.contains(&language.as_str()) {
            invalid.push((
                "BOT_LANGUAGE".into(),
                format!("expected one of {:?}, got '{}'", SUPPORTED_LANGUAGES, language),
            ));
        }

        let api_url = match api_url {
            Ok(url) if invalid.is_empty() => url,
            _ => {
                return Err(ConfigError {
                    invalid_vars: invalid,
                })
            }
        };

        Ok(Self {
            bot_token,
            api_url,
            monitored_url,
            poll_interval: Duration::from_secs(poll_interval),
            fetch_retry_interval: Duration::from_secs(fetch_retry),
            request_timeout: Duration::from_secs(request_timeout),
            slow_threshold: Duration::from_millis(slow_threshold),
            language,
        })
    }

    pub fn has_bot_token(&self) -> bool {
        !self.bot_token.is_empty()
    }
}
