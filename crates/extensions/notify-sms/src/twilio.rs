//! SMS delivery through the Twilio Messages API.

use async_trait::async_trait;
use serde::Deserialize;
use stockwatch_config::TwilioConfig;
use stockwatch_protocols::{Notifier, NotifyError, NotifyOutcome};
use tracing::{debug, warn};

#[cfg(test)]
#[path = "twilio_tests.rs"]
mod tests;

const CHANNEL: &str = "twilio";
const API_VERSION: &str = "2010-04-01";

/// Who a message is sent as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwilioSender {
    /// A Twilio phone number.
    From(String),
    /// A messaging service, which picks the number itself.
    MessagingService(String),
}

/// Successful `Messages.json` reply. Only the fields we log.
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
    status: Option<String>,
}

/// Error reply, e.g. `{"code": 21211, "message": "...", "status": 400}`.
#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<i64>,
    message: String,
}

/// Sends alerts as SMS via Twilio.
pub struct TwilioNotifier {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    sender: TwilioSender,
    base_url: String,
}

impl TwilioNotifier {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        sender: TwilioSender,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            sender,
            base_url: "https://api.twilio.com".to_string(),
        }
    }

    /// Point at a different API host (regional edge, test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build from configuration. A messaging service takes precedence over
    /// `from` when both are set.
    pub fn from_config(config: &TwilioConfig) -> Result<Self, NotifyError> {
        let account_sid = config
            .account_sid
            .clone()
            .ok_or_else(|| NotifyError::NotConfigured("notify.twilio.account_sid".to_string()))?;
        let auth_token = config
            .auth_token
            .clone()
            .ok_or_else(|| NotifyError::NotConfigured("notify.twilio.auth_token".to_string()))?;
        let sender = match (&config.messaging_service_sid, &config.from) {
            (Some(service), _) => TwilioSender::MessagingService(service.clone()),
            (None, Some(from)) => TwilioSender::From(from.clone()),
            (None, None) => {
                return Err(NotifyError::NotConfigured(
                    "notify.twilio.from or notify.twilio.messaging_service_sid".to_string(),
                ))
            }
        };

        Ok(Self::new(account_sid, auth_token, sender).with_base_url(&config.base_url))
    }

    pub fn sender(&self) -> &TwilioSender {
        &self.sender
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/{}/Accounts/{}/Messages.json",
            self.base_url, API_VERSION, self.account_sid
        )
    }

    fn form<'a>(&'a self, recipient: &'a str, text: &'a str) -> Vec<(&'static str, &'a str)> {
        let sender = match self.sender {
            TwilioSender::From(ref number) => ("From", number.as_str()),
            TwilioSender::MessagingService(ref sid) => ("MessagingServiceSid", sid.as_str()),
        };
        vec![("To", recipient), sender, ("Body", text)]
    }
}

#[async_trait]
impl Notifier for TwilioNotifier {
    fn channel(&self) -> &str {
        CHANNEL
    }

    async fn notify(&self, recipient: &str, text: &str) -> NotifyOutcome {
        if recipient.trim().is_empty() {
            return NotifyOutcome::failed(CHANNEL, "No recipient phone number");
        }

        debug!(recipient, chars = text.chars().count(), "Sending SMS via Twilio");

        let response = match self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&self.form(recipient, text))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Twilio request failed: {}", e);
                return NotifyOutcome::failed(CHANNEL, format!("Failed to reach Twilio: {}", e));
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let detail = match serde_json::from_str::<ApiError>(&body) {
                Ok(ApiError {
                    code: Some(code),
                    message,
                }) => format!("{} (code {})", message, code),
                Ok(ApiError { message, .. }) => message,
                Err(_) => body,
            };
            warn!(%status, "Twilio rejected message: {}", detail);
            return NotifyOutcome::failed(CHANNEL, format!("Twilio API error {}: {}", status, detail));
        }

        match serde_json::from_str::<MessageResource>(&body) {
            Ok(message) => {
                debug!(sid = %message.sid, status = ?message.status, "Twilio accepted message");
                NotifyOutcome::delivered(
                    CHANNEL,
                    format!("SMS sent to {}", recipient),
                    Some(message.sid),
                )
            }
            Err(e) => {
                warn!("Unexpected Twilio response: {}", e);
                NotifyOutcome::delivered(CHANNEL, format!("SMS sent to {}", recipient), None)
            }
        }
    }
}
