use async_trait::async_trait;
use eyre::Result;
use tracing::info;

/// Delivery surface for user-visible alerts.
///
/// Whether alerts may be shown at all is a runtime permission reported by
/// the sink; scheduling and delivery both check it before doing any work.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    fn permission_granted(&self) -> bool;

    async fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Sink that writes alerts to the log. Stands in for a platform
/// notification surface in the daemon and during development.
pub struct TracingSink {
    enabled: bool,
}

impl TracingSink {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl NotificationSink for TracingSink {
    fn permission_granted(&self) -> bool {
        self.enabled
    }

    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        info!("Reminder due: {} ({})", title, body);
        Ok(())
    }
}
