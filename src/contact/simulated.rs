//! Stand-in sender that waits and then reports a configured outcome

use super::{ContactMessage, ContactSender, SendError};
use async_trait::async_trait;
use std::time::Duration;

/// Default latency of a simulated delivery
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Sender with no real transport: sleeps, logs the message, then succeeds
/// or fails as configured
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
    fail: bool,
}

impl SimulatedSender {
    pub fn new(delay: Duration, fail: bool) -> Self {
        Self { delay, fail }
    }
}

#[async_trait]
impl ContactSender for SimulatedSender {
    async fn send(&self, message: ContactMessage) -> Result<(), SendError> {
        tokio::time::sleep(self.delay).await;

        match serde_json::to_string(&message) {
            Ok(json) => tracing::debug!(id = %message.id, payload = %json, "simulated delivery"),
            Err(e) => tracing::warn!(id = %message.id, "could not serialize message: {e}"),
        }

        let subject = message.get("subject").unwrap_or_default();
        if self.fail {
            tracing::info!(id = %message.id, subject, "simulated delivery rejected");
            Err(SendError::Rejected("simulated failure".to_string()))
        } else {
            tracing::info!(id = %message.id, subject, "simulated delivery succeeded");
            Ok(())
        }
    }
}
