//! Notification port trait

use async_trait::async_trait;

use crate::error::NotificationError;

/// Delivers confirmation messages to buyers
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a message with the given subject and HTML body
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError>;
}
