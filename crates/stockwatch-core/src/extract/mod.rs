//! Availability extraction from rendered product pages.
//!
//! [`AvailabilityExtractor::extract`] is a pure function of the document:
//!
//! 1. title, falling back to [`UNKNOWN_TITLE`]
//! 2. unrecognized documents (empty, bot checks) yield an unknown result
//! 3. explicit unavailability wording short-circuits to unavailable/high
//! 4. deal price (structured block, then a bounded text scan) and list price
//! 5. weighted signal scoring, classified into available/confidence

mod phrases;
mod price;
mod selectors;
mod signals;
mod text;

use scraper::Html;
use tracing::debug;

use stockwatch_protocols::{CheckResult, Confidence, UNKNOWN_TITLE};

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;

/// Extractor settings.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Lowest plausible price for the fallback text scan.
    pub price_floor: f64,
    /// Highest plausible price for the fallback text scan.
    pub price_ceiling: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            price_floor: 100.0,
            price_ceiling: 300.0,
        }
    }
}

/// Turns rendered HTML into a [`CheckResult`].
#[derive(Debug, Clone, Default)]
pub struct AvailabilityExtractor {
    config: ExtractorConfig,
}

impl AvailabilityExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract title, prices and availability from `html`.
    ///
    /// Never fails: missing fields degrade to sentinels, and a document that
    /// cannot be interpreted yields `available = None, confidence = Unknown`.
    pub fn extract(&self, html: &str, source_url: &str) -> CheckResult {
        let document = Html::parse_document(html);
        let mut result = CheckResult::unknown(source_url);

        result.title = Self::title(&document);

        let text = text::visible_text(&document).to_lowercase();
        if text.is_empty() {
            debug!("Document has no visible text");
            return result;
        }
        if phrases::is_bot_check(&text) {
            debug!("Document is a bot-check interstitial");
            return result;
        }

        if let Some(phrase) = phrases::says_unavailable(&text) {
            debug!(phrase, "Unavailability phrase found, skipping scoring");
            result.available = Some(false);
            result.confidence = Confidence::High;
            return result;
        }

        result.deal_price = price::structured_price(&document).or_else(|| {
            price::fallback_price(&text, self.config.price_floor, self.config.price_ceiling)
        });
        result.list_price = price::list_price(&document, result.deal_price.as_deref());

        let fired = signals::detect(&document, &text);
        let (available, confidence) = signals::classify(&fired);
        result.score = signals::score(&fired);
        debug!(signals = ?fired, score = result.score, %confidence, "Scored availability signals");

        result.signals = fired;
        result.available = available;
        result.confidence = confidence;
        result
    }

    fn title(document: &Html) -> String {
        selectors::TITLE
            .iter()
            .filter_map(|sel| document.select(sel).next())
            .map(text::element_text)
            .find(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
    }
}
