//! Log-only notification channel.

use async_trait::async_trait;
use stockwatch_protocols::{Notifier, NotifyOutcome};

/// Writes alerts to the log at `warn`, so they stand out at the default level.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn channel(&self) -> &str {
        "log"
    }

    async fn notify(&self, recipient: &str, text: &str) -> NotifyOutcome {
        tracing::warn!(recipient, "[ALERT] {}", text.replace('\n', " | "));
        NotifyOutcome::delivered("log", "Alert logged", None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_notifier_succeeds() {
        let outcome = LogNotifier::new().notify("+15551234567", "IN STOCK\nWidget").await;
        assert!(outcome.success);
        assert_eq!(outcome.channel, "log");
        assert!(outcome.delivery_id.is_none());
    }
}
