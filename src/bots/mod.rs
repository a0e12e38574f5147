pub mod commands;
pub mod telegram_api;
pub mod uptime_bot;
