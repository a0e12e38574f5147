pub mod bots;
pub mod config;
pub mod i18n;
pub mod observability;
pub mod services;
