use super::METRICS;
use teloxide::RequestError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TelegramErrorKind {
    RateLimited,
    Unauthorized,
    BotBlocked,
    ChatNotFound,
    NetworkError,
    InvalidResponse,
    Other,
}

pub fn classify_telegram_error(error: &RequestError) -> TelegramErrorKind {
    match error {
        RequestError::RetryAfter(_) => TelegramErrorKind::RateLimited,
        RequestError::Api(api_error) => {
            let error_str = api_error.to_string().to_lowercase();
            if error_str.contains("blocked") {
                TelegramErrorKind::BotBlocked
            } else if error_str.contains("chat not found")
                || error_str.contains("chat_not_found")
                || error_str.contains("user not found")
            {
                TelegramErrorKind::ChatNotFound
            } else if error_str.contains("unauthorized")
                || error_str.contains("invalid bot token")
                || error_str.contains("not found")
            {
                // A bad token makes the Bot API answer 401 or 404 for every method.
                TelegramErrorKind::Unauthorized
            } else {
                TelegramErrorKind::Other
            }
        }
        RequestError::Network(_) | RequestError::Io(_) => TelegramErrorKind::NetworkError,
        RequestError::InvalidJson { .. } => TelegramErrorKind::InvalidResponse,
        _ => TelegramErrorKind::Other,
    }
}

/// Logs a failed `getUpdates` call. The caller retries after a fixed pause.
pub fn log_fetch_error(error: &RequestError, offset: i32) {
    METRICS.increment_fetch_errors();

    match classify_telegram_error(error) {
        TelegramErrorKind::Unauthorized => {
            tracing::error!(
                offset,
                "Error getting updates, check BOT_TOKEN: {}",
                error
            );
        }
        TelegramErrorKind::RateLimited => {
            tracing::warn!(offset, "Rate limited while getting updates: {:?}", error);
        }
        kind => {
            tracing::warn!(offset, ?kind, "Error getting updates: {}", error);
        }
    }
}

/// Logs a failed `sendMessage` call. Sends are never retried.
pub fn log_send_error(error: &RequestError, chat_id: i64) {
    METRICS.increment_send_failures();

    match classify_telegram_error(error) {
        TelegramErrorKind::BotBlocked => {
            tracing::info!(chat_id, "Bot blocked by user, message dropped");
        }
        TelegramErrorKind::ChatNotFound => {
            tracing::warn!(chat_id, "Chat not found on Telegram, message dropped");
        }
        TelegramErrorKind::NetworkError => {
            tracing::error!(chat_id, "Network error sending message: {}", error);
        }
        kind => {
            tracing::error!(chat_id, ?kind, "Error sending message: {}", error);
        }
    }
}
