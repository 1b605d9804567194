use std::sync::Arc;

use color_eyre::eyre::Result;
use datebook_notifier::config::NotifierConfig;
use datebook_notifier::sink::{NotificationSink, TracingSink};
use datebook_notifier::store::ReminderStore;
use dotenv::dotenv;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting datebook reminder daemon");

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = NotifierConfig::from_env()?;

    // Open the local reminder store
    let store = ReminderStore::open(&config.reminder_db_path).await?;
    let sink: Arc<dyn NotificationSink> =
        Arc::new(TracingSink::new(config.notifications_enabled));

    // Run the periodic due-check
    match datebook_notifier::run_daemon(config, store, sink).await {
        Ok(_) => info!("Reminder daemon shut down gracefully"),
        Err(e) => error!("Reminder daemon error: {}", e),
    }

    Ok(())
}
