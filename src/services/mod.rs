pub mod uptime_checker;
