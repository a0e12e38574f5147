use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

pub struct Metrics {
    pub updates_received: AtomicU64,
    pub commands_handled: AtomicU64,
    pub messages_sent: AtomicU64,
    pub send_failures: AtomicU64,
    pub fetch_errors: AtomicU64,
    pub uptime_checks: AtomicU64,
    pub uptime_failures: AtomicU64,
    pub slow_responses: AtomicU64,
    pub start_time: Instant,
}

#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub updates_received: u64,
    pub commands_handled: u64,
    pub messages_sent: u64,
    pub send_failures: u64,
    pub fetch_errors: u64,
    pub uptime_checks: u64,
    pub uptime_failures: u64,
    pub slow_responses: u64,
    pub uptime_secs: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            updates_received: AtomicU64::new(0),
            commands_handled: AtomicU64::new(0),
            messages_sent: AtomicU64::new(0),
            send_failures: AtomicU64::new(0),
            fetch_errors: AtomicU64::new(0),
            uptime_checks: AtomicU64::new(0),
            uptime_failures: AtomicU64::new(0),
            slow_responses: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn add_updates_received(&self, count: usize) {
        self.updates_received.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn increment_commands_handled(&self) {
        self.commands_handled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_messages_sent(&self) {
        self.messages_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_send_failures(&self) {
        self.send_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fetch_errors(&self) {
        self.fetch_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_uptime_check(&self) {
        self.uptime_checks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_uptime_failure(&self) {
        self.uptime_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_slow_response(&self) {
        self.slow_responses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            updates_received: self.updates_received.load(Ordering::Relaxed),
            commands_handled: self.commands_handled.load(Ordering::Relaxed),
            messages_sent: self.messages_sent.load(Ordering::Relaxed),
            send_failures: self.send_failures.load(Ordering::Relaxed),
            fetch_errors: self.fetch_errors.load(Ordering::Relaxed),
            uptime_checks: self.uptime_checks.load(Ordering::Relaxed),
            uptime_failures: self.uptime_failures.load(Ordering::Relaxed),
            slow_responses: self.slow_responses.load(Ordering::Relaxed),
            uptime_secs: self.start_time.elapsed().as_secs(),
        }
    }
}
