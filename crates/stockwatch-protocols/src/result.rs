//! Check result types.
//!
//! A [`CheckResult`] is created fresh for every check and discarded after it
//! has been reported. It has no identity beyond that single check.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;

/// Title used when the page has no recognizable title element.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// How much evidence supports the availability determination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Unknown,
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Unknown => "unknown",
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category a signal belongs to.
///
/// High confidence requires independent categories to agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Stock wording on the page.
    Textual,
    /// Delivery promise wording.
    Delivery,
    /// Purchase controls present in the DOM.
    Structural,
}

/// One independent piece of availability evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Explicit "in stock" text.
    InStockText,
    /// "Only N left in stock".
    FewLeftInStock,
    /// "Get it by", "free delivery", "arrives" and similar.
    DeliveryPromise,
    /// Add-to-cart, buy-now or buy-box element.
    BuyControl,
    /// Cart submission form control.
    CartForm,
}

impl Signal {
    /// All signals, in evaluation order.
    pub const ALL: [Signal; 5] = [
        Signal::InStockText,
        Signal::FewLeftInStock,
        Signal::DeliveryPromise,
        Signal::BuyControl,
        Signal::CartForm,
    ];

    /// Score contribution when the signal fires.
    pub fn weight(&self) -> u32 {
        match self {
            Signal::InStockText => 3,
            Signal::FewLeftInStock => 3,
            Signal::DeliveryPromise => 2,
            Signal::BuyControl => 3,
            Signal::CartForm => 2,
        }
    }

    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::InStockText | Signal::FewLeftInStock => SignalKind::Textual,
            Signal::DeliveryPromise => SignalKind::Delivery,
            Signal::BuyControl | Signal::CartForm => SignalKind::Structural,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::InStockText => "in_stock_text",
            Signal::FewLeftInStock => "few_left_in_stock",
            Signal::DeliveryPromise => "delivery_promise",
            Signal::BuyControl => "buy_control",
            Signal::CartForm => "cart_form",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Product title, or [`UNKNOWN_TITLE`].
    pub title: String,
    /// Currently advertised price as displayed, e.g. `"$219.99"`.
    pub deal_price: Option<String>,
    /// Original/strikethrough price, only when it differs from `deal_price`.
    pub list_price: Option<String>,
    /// `Some(true)`/`Some(false)` when determined, `None` when the document
    /// could not be interpreted at all.
    pub available: Option<bool>,
    pub confidence: Confidence,
    /// The URL that was checked.
    pub source_url: String,
    /// Signals that fired during scoring.
    #[serde(default)]
    pub signals: Vec<Signal>,
    /// Sum of the fired signal weights.
    #[serde(default)]
    pub score: u32,
}

impl CheckResult {
    /// A blank result for `source_url`: unknown title, nothing determined.
    pub fn unknown(source_url: impl Into<String>) -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            deal_price: None,
            list_price: None,
            available: None,
            confidence: Confidence::Unknown,
            source_url: source_url.into(),
            signals: Vec::new(),
            score: 0,
        }
    }

    /// Whether the page was determined to be in stock.
    pub fn is_available(&self) -> bool {
        self.available == Some(true)
    }

    /// Human-readable status, e.g. `IN STOCK (high)`.
    pub fn status_line(&self) -> String {
        let status = match self.available {
            Some(true) => "IN STOCK",
            Some(false) => "OUT OF STOCK",
            None => "UNKNOWN",
        };
        format!("{} ({})", status, self.confidence)
    }
}
