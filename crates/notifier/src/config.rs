use eyre::{Result, WrapErr};
use std::env;

/// Configuration for the reminder daemon.
///
/// All values come from environment variables:
///
/// - `REMINDER_DB_PATH`: SQLite file holding pending reminders
///   (default: "reminders.db")
/// - `REMINDER_CHECK_INTERVAL_SECONDS`: seconds between due-check sweeps
///   (default: 300)
/// - `NOTIFICATIONS_ENABLED`: whether the delivery surface may show alerts
///   (default: true; "0" or "false" disables)
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub reminder_db_path: String,
    pub check_interval_secs: u64,
    pub notifications_enabled: bool,
}

impl NotifierConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let reminder_db_path =
            env::var("REMINDER_DB_PATH").unwrap_or_else(|_| "reminders.db".to_string());

        let check_interval_secs = env::var("REMINDER_CHECK_INTERVAL_SECONDS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .wrap_err("Invalid REMINDER_CHECK_INTERVAL_SECONDS value")?;

        let notifications_enabled = env::var("NOTIFICATIONS_ENABLED")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Ok(Self {
            reminder_db_path,
            check_interval_secs,
            notifications_enabled,
        })
    }
}
