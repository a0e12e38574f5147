use crate::config::AppConfig;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::UpdateKind;
use teloxide::RequestError;

/// One inbound update, reduced to what the command interpreter reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundUpdate {
    pub update_id: i32,
    /// `None` for updates that are not messages (edits, callbacks, member changes).
    pub chat_id: Option<i64>,
    pub text: Option<String>,
}

#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Updates with `update_id >= offset`, oldest first.
    async fn get_updates(&self, offset: i32) -> Result<Vec<InboundUpdate>, RequestError>;

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), RequestError>;
}

pub struct TelegramApi {
    bot: Bot,
}

impl TelegramApi {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = teloxide::net::default_reqwest_settings()
            .timeout(config.request_timeout)
            .build()?;

        let bot = Bot::with_client(&config.bot_token, client).set_api_url(config.api_url.clone());

        Ok(Self { bot })
    }
}

impl From<Update> for InboundUpdate {
    fn from(update: Update) -> Self {
        let (chat_id, text) = match &update.kind {
            UpdateKind::Message(msg) => (Some(msg.chat.id.0), msg.text().map(str::to_string)),
            _ => (None, None),
        };

        InboundUpdate {
            update_id: update.id,
            chat_id,
            text,
        }
    }
}

#[async_trait]
impl ChatApi for TelegramApi {
    async fn get_updates(&self, offset: i32) -> Result<Vec<InboundUpdate>, RequestError> {
        let updates = self.bot.get_updates().offset(offset).await?;
        Ok(updates.into_iter().map(InboundUpdate::from).collect())
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), RequestError> {
        self.bot.send_message(ChatId(chat_id), text).await?;
        Ok(())
    }
}
