//! Trait abstraction for contact delivery to enable mocking in tests

use super::{ContactMessage, SendError};
use async_trait::async_trait;

/// Delivers a validated contact message.
///
/// Completes exactly once, with success or a [`SendError`]. Timeouts are the
/// implementation's concern; callers never cancel a send.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, message: ContactMessage) -> Result<(), SendError>;
}
