use dotenv::dotenv;
use sitewatch::bots::telegram_api::TelegramApi;
use sitewatch::bots::uptime_bot::UptimeBot;
use sitewatch::config::AppConfig;
use sitewatch::observability::{startup, METRICS};
use sitewatch::services::uptime_checker::HttpProbe;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    startup::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error:\n{}", e);
            std::process::exit(1);
        }
    };
    startup::log_startup(&config);

    let chat = TelegramApi::new(&config)?;
    let probe = HttpProbe::new(config.request_timeout)?;

    UptimeBot::new(chat, probe, &config)
        .run_until(shutdown_signal())
        .await;

    let snapshot = METRICS.snapshot();
    tracing::info!(
        updates_received = snapshot.updates_received,
        commands_handled = snapshot.commands_handled,
        messages_sent = snapshot.messages_sent,
        send_failures = snapshot.send_failures,
        fetch_errors = snapshot.fetch_errors,
        uptime_checks = snapshot.uptime_checks,
        uptime_failures = snapshot.uptime_failures,
        slow_responses = snapshot.slow_responses,
        uptime_secs = snapshot.uptime_secs,
        "Final metrics"
    );

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
