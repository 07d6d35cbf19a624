//! Notifier protocol.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Delivers short text messages to a single recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel identifier (e.g. "twilio", "log").
    fn channel(&self) -> &str;

    /// Deliver `text` to `recipient`.
    ///
    /// Never fails: delivery problems are reported in the returned outcome.
    async fn notify(&self, recipient: &str, text: &str) -> NotifyOutcome;
}

/// Result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyOutcome {
    /// Whether the message was accepted for delivery.
    pub success: bool,
    /// Channel used.
    pub channel: String,
    /// Status message.
    pub message: String,
    /// Provider delivery ID if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_id: Option<String>,
}

impl NotifyOutcome {
    /// A successful delivery.
    pub fn delivered(
        channel: impl Into<String>,
        message: impl Into<String>,
        delivery_id: Option<String>,
    ) -> Self {
        Self {
            success: true,
            channel: channel.into(),
            message: message.into(),
            delivery_id,
        }
    }

    /// A failed delivery.
    pub fn failed(channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            channel: channel.into(),
            message: message.into(),
            delivery_id: None,
        }
    }
}
