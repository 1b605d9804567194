use std::sync::Arc;

use color_eyre::eyre::Result;
use datebook_api::config::ApiConfig;
use datebook_db::{create_pool, schema::initialize_database};
use datebook_notifier::config::NotifierConfig;
use datebook_notifier::sink::{NotificationSink, TracingSink};
use datebook_notifier::store::ReminderStore;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    let notifier_config = NotifierConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Open the local reminder store
    let reminders = ReminderStore::open(&notifier_config.reminder_db_path).await?;
    let sink: Arc<dyn NotificationSink> =
        Arc::new(TracingSink::new(notifier_config.notifications_enabled));

    // Start API server
    datebook_api::start_server(config, db_pool, reminders, sink).await?;

    Ok(())
}
