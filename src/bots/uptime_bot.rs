use crate::bots::commands::Command;
use crate::bots::telegram_api::{ChatApi, InboundUpdate};
use crate::config::AppConfig;
use crate::i18n::{t, t_with_args};
use crate::observability::telegram_errors::{log_fetch_error, log_send_error};
use crate::observability::METRICS;
use crate::services::uptime_checker::SiteProbe;
use std::future::Future;
use std::time::Duration;

/// Everything the loop mutates. Owned by [`UptimeBot`]; never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorState {
    pub monitored_url: String,
    pub is_running: bool,
    /// Last chat that sent anything. Monitoring reports go here.
    pub last_chat_id: Option<i64>,
    pub update_offset: i32,
}

impl MonitorState {
    pub fn new(monitored_url: impl Into<String>) -> Self {
        Self {
            monitored_url: monitored_url.into(),
            is_running: false,
            last_chat_id: None,
            update_offset: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoopSettings {
    pub poll_interval: Duration,
    pub fetch_retry_interval: Duration,
    pub slow_threshold: Duration,
    pub language: String,
}

impl From<&AppConfig> for LoopSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            poll_interval: config.poll_interval,
            fetch_retry_interval: config.fetch_retry_interval,
            slow_threshold: config.slow_threshold,
            language: config.language.clone(),
        }
    }
}

pub struct UptimeBot<C, P> {
    chat: C,
    probe: P,
    settings: LoopSettings,
    state: MonitorState,
}

impl<C: ChatApi, P: SiteProbe> UptimeBot<C, P> {
    pub fn new(chat: C, probe: P, config: &AppConfig) -> Self {
        Self::with_state(
            chat,
            probe,
            LoopSettings::from(config),
            MonitorState::new(config.monitored_url.clone()),
        )
    }

    pub fn with_state(chat: C, probe: P, settings: LoopSettings, state: MonitorState) -> Self {
        Self {
            chat,
            probe,
            settings,
            state,
        }
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    /// Runs iterations until `shutdown` resolves. Shutdown is observed while an
    /// iteration is in flight and during the sleep between iterations.
    pub async fn run_until<F>(mut self, shutdown: F) -> MonitorState
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let delay = tokio::select! {
                _ = &mut shutdown => break,
                delay = self.tick() => delay,
            };

            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        tracing::info!(
            monitored_url = %self.state.monitored_url,
            is_running = self.state.is_running,
            update_offset = self.state.update_offset,
            "Closing bot... Goodbye!"
        );
        self.state
    }

    /// One loop iteration. Returns how long to sleep before the next one.
    pub async fn tick(&mut self) -> Duration {
        let offset = self.state.update_offset;
        let updates = match self.chat.get_updates(offset).await {
            Ok(updates) => updates,
            Err(e) => {
                log_fetch_error(&e, offset);
                return self.settings.fetch_retry_interval;
            }
        };

        METRICS.add_updates_received(updates.len());
        for update in updates {
            self.handle_update(update).await;
        }

        if self.state.is_running {
            self.run_check().await;
        }

        self.settings.poll_interval
    }

    pub async fn handle_update(&mut self, update: InboundUpdate) {
        tracing::debug!(
            update_id = update.update_id,
            chat_id = ?update.chat_id,
            "Received update"
        );

        if let Some(chat_id) = update.chat_id {
            self.state.last_chat_id = Some(chat_id);

            if let Some(command) = update.text.as_deref().and_then(Command::parse) {
                METRICS.increment_commands_handled();
                self.handle_command(chat_id, command).await;
            }
        }

        self.state.update_offset = update.update_id + 1;
    }

    async fn handle_command(&mut self, chat_id: i64, command: Command) {
        let lang = self.settings.language.clone();

        let reply = match command {
            Command::Start => t(&lang, "commands.help"),
            Command::SetUrl(url) => {
                tracing::info!(chat_id, from = %self.state.monitored_url, to = %url, "Monitored URL changed");
                let reply = t_with_args(&lang, "commands.url_updated", &[&url]);
                self.state.monitored_url = url;
                reply
            }
            Command::UrlUsage => t(&lang, "commands.url_usage"),
            Command::Begin => {
                if self.state.is_running {
                    t(&lang, "commands.already_running")
                } else {
                    self.state.is_running = true;
                    tracing::info!(chat_id, url = %self.state.monitored_url, "Monitoring started");
                    t(&lang, "commands.begin")
                }
            }
            Command::Stop => {
                if self.state.is_running {
                    self.state.is_running = false;
                    tracing::info!(chat_id, "Monitoring stopped");
                    t(&lang, "commands.stop")
                } else {
                    t(&lang, "commands.already_stopped")
                }
            }
            Command::Merhaba => t(&lang, "commands.merhaba"),
        };

        self.send(chat_id, &reply).await;
    }

    async fn run_check(&mut self) {
        let Some(chat_id) = self.state.last_chat_id else {
            tracing::warn!("Monitoring is active but no chat is known yet, skipping check");
            return;
        };

        METRICS.increment_uptime_check();
        let result = self.probe.probe(&self.state.monitored_url).await;
        if !result.is_up() {
            METRICS.increment_uptime_failure();
        }

        let lang = &self.settings.language;
        self.send(chat_id, &result.status_text(lang)).await;

        if result.is_slow(self.settings.slow_threshold) {
            METRICS.increment_slow_response();
            self.send(chat_id, &result.slow_warning(lang)).await;
        }
    }

    async fn send(&self, chat_id: i64, text: &str) {
        match self.chat.send_message(chat_id, text).await {
            Ok(()) => METRICS.increment_messages_sent(),
            Err(e) => log_send_error(&e, chat_id),
        }
    }
}
