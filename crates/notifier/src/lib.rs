//! # Datebook Notifier
//!
//! Schedules booking reminders and delivers them when due. Reminders live in
//! a local durable SQLite store, one per booked date slot, due 15 days
//! before the slot's date. Delivery goes through the [`sink::NotificationSink`]
//! trait so the actual alert surface stays pluggable; the daemon ships with
//! a sink that writes to the log.

/// Environment configuration for the reminder daemon
pub mod config;
/// Reminder title/body assembly
pub mod payload;
/// Reminder timing, idempotent scheduling, and the due-check sweep
pub mod scheduler;
/// Pluggable delivery surface
pub mod sink;
/// Local durable reminder store
pub mod store;

use std::sync::Arc;

use chrono::Utc;
use eyre::Result;
use tracing::{error, info};

use crate::sink::NotificationSink;
use crate::store::ReminderStore;

/// Run the periodic due-check until the process is stopped.
pub async fn run_daemon(
    config: config::NotifierConfig,
    store: ReminderStore,
    sink: Arc<dyn NotificationSink>,
) -> Result<()> {
    info!(
        "Reminder daemon running, checking every {}s",
        config.check_interval_secs
    );

    let mut interval =
        tokio::time::interval(std::time::Duration::from_secs(config.check_interval_secs));
    loop {
        interval.tick().await;
        if let Err(e) = scheduler::run_due_check(&store, sink.as_ref(), Utc::now()).await {
            error!("Due check failed: {}", e);
        }
    }
}
