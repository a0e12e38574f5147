use crate::i18n::{t, t_with_args};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Responded { status_code: u16 },
    /// DNS, connect, TLS and timeout failures all land here.
    Unreachable { reason: String },
}

#[derive(Debug, Clone)]
pub struct HealthResult {
    pub url: String,
    pub outcome: CheckOutcome,
    pub duration: Duration,
}

impl HealthResult {
    pub fn is_up(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Responded { status_code: 200 })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.outcome {
            CheckOutcome::Responded { status_code } => Some(status_code),
            CheckOutcome::Unreachable { .. } => None,
        }
    }

    pub fn response_time_millis(&self) -> u64 {
        self.duration.as_millis() as u64
    }

    /// Whole milliseconds strictly above the threshold.
    pub fn is_slow(&self, threshold: Duration) -> bool {
        self.response_time_millis() > threshold.as_millis() as u64
    }

    pub fn status_text(&self, language: &str) -> String {
        match &self.outcome {
            CheckOutcome::Responded { status_code } => {
                let key = if self.is_up() { "check.up" } else { "check.down" };
                t_with_args(
                    language,
                    key,
                    &[
                        &self.url,
                        &status_code.to_string(),
                        &self.response_time_millis().to_string(),
                    ],
                )
            }
            CheckOutcome::Unreachable { .. } => t(language, "check.issue"),
        }
    }

    pub fn slow_warning(&self, language: &str) -> String {
        t_with_args(
            language,
            "check.slow",
            &[&self.response_time_millis().to_string()],
        )
    }
}

#[async_trait]
pub trait SiteProbe: Send + Sync {
    async fn probe(&self, url: &str) -> HealthResult;
}

pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SiteProbe for HttpProbe {
    async fn probe(&self, url: &str) -> HealthResult {
        check_health(&self.client, url).await
    }
}

/// Times a single GET up to the response headers. The body is never read.
pub async fn check_health(client: &Client, url: &str) -> HealthResult {
    let start = Instant::now();
    let response = client.get(url).send().await;
    let duration = start.elapsed();

    let outcome = match response {
        Ok(res) => {
            let status_code = res.status().as_u16();
            if status_code == 200 {
                tracing::info!(url, status_code, ?duration, "Website is UP");
            } else {
                tracing::warn!(url, status_code, ?duration, "Website is DOWN");
            }
            CheckOutcome::Responded { status_code }
        }
        Err(e) => {
            tracing::warn!(url, ?duration, "Error fetching the page: {}", e);
            CheckOutcome::Unreachable {
                reason: e.to_string(),
            }
        }
    };

    HealthResult {
        url: url.to_string(),
        outcome,
        duration,
    }
}
