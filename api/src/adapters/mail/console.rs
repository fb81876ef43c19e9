//! Console notifier
//!
//! Logs confirmation emails instead of sending them.

use async_trait::async_trait;

use crate::domain::ports::Notifier;
use crate::error::NotificationError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        tracing::info!(to, subject, "EMAIL\n{}", body);
        Ok(())
    }
}
