//! One availability check: render, extract, decide, notify.

use chrono::Local;
use thiserror::Error;
use tracing::{info, warn};

use stockwatch_protocols::{CheckResult, Notifier, NotifyOutcome, PageRenderer, RenderError};

use crate::alert::format_alert;
use crate::extract::AvailabilityExtractor;
use crate::policy::{decide, Decision};

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;

/// Failures that prevent a check from producing a result.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to render {url}: {source}")]
    Render {
        url: String,
        #[source]
        source: RenderError,
    },
}

/// Per-run options.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Decide and log, but never deliver.
    pub dry_run: bool,
    /// Store name for the alert headline.
    pub store_label: String,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            store_label: "Amazon".to_string(),
        }
    }
}

/// What a completed check produced.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub result: CheckResult,
    pub decision: Decision,
    /// Present only when delivery was attempted.
    pub notification: Option<NotifyOutcome>,
}

/// Runs a single check against one product page.
pub struct Checker {
    renderer: Box<dyn PageRenderer>,
    notifier: Box<dyn Notifier>,
    extractor: AvailabilityExtractor,
    options: CheckOptions,
}

impl Checker {
    pub fn new(
        renderer: Box<dyn PageRenderer>,
        notifier: Box<dyn Notifier>,
        extractor: AvailabilityExtractor,
        options: CheckOptions,
    ) -> Self {
        Self {
            renderer,
            notifier,
            extractor,
            options,
        }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Check `url` and alert `recipient` if the page is confidently in stock.
    ///
    /// Only a render failure is an error. An undeliverable alert is reported
    /// in [`CheckReport::notification`].
    pub async fn run(&self, url: &str, recipient: &str) -> Result<CheckReport, CheckError> {
        info!(url, renderer = self.renderer.name(), "Checking product page");

        let html = self
            .renderer
            .render(url)
            .await
            .map_err(|source| CheckError::Render {
                url: url.to_string(),
                source,
            })?;

        let result = self.extractor.extract(&html, url);
        info!(
            title = %result.title,
            available = ?result.available,
            confidence = %result.confidence,
            deal_price = ?result.deal_price,
            "Extracted availability"
        );

        let decision = decide(&result, self.options.dry_run);
        let notification = match decision {
            Decision::Notify => Some(self.send_alert(&result, recipient).await),
            Decision::Suppressed => {
                info!(recipient, "Dry run, alert not sent");
                None
            }
            Decision::Skip => None,
        };

        Ok(CheckReport {
            result,
            decision,
            notification,
        })
    }

    async fn send_alert(&self, result: &CheckResult, recipient: &str) -> NotifyOutcome {
        let text = format_alert(result, &self.options.store_label, Local::now());
        let outcome = self.notifier.notify(recipient, &text).await;
        if outcome.success {
            info!(
                channel = %outcome.channel,
                delivery_id = ?outcome.delivery_id,
                "Alert sent"
            );
        } else {
            warn!(channel = %outcome.channel, error = %outcome.message, "Alert delivery failed");
        }
        outcome
    }
}
