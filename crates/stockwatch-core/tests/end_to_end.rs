//! End-to-end checks against saved product pages.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use stockwatch_core::{
    AvailabilityExtractor, CheckOptions, Checker, Confidence, Decision, Signal, should_notify,
};
use stockwatch_protocols::{Notifier, NotifyOutcome, PageRenderer, RenderError};

const IN_STOCK: &str = include_str!("fixtures/widget_pro_in_stock.html");
const UNAVAILABLE: &str = include_str!("fixtures/widget_pro_unavailable.html");
const ROBOT_CHECK: &str = include_str!("fixtures/robot_check.html");

const URL: &str = "https://www.amazon.ca/dp/B0DGJJKWW7";
const PHONE: &str = "+15551234567";

struct FixtureRenderer(&'static str);

#[async_trait]
impl PageRenderer for FixtureRenderer {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn render(&self, _url: &str) -> Result<String, RenderError> {
        Ok(self.0.to_string())
    }
}

#[derive(Clone, Default)]
struct Outbox(Arc<Mutex<Vec<String>>>);

#[async_trait]
impl Notifier for Outbox {
    fn channel(&self) -> &str {
        "outbox"
    }

    async fn notify(&self, _recipient: &str, text: &str) -> NotifyOutcome {
        self.0.lock().push(text.to_string());
        NotifyOutcome::delivered("outbox", "stored", None)
    }
}

fn checker(page: &'static str, outbox: &Outbox) -> Checker {
    Checker::new(
        Box::new(FixtureRenderer(page)),
        Box::new(outbox.clone()),
        AvailabilityExtractor::default(),
        CheckOptions {
            dry_run: false,
            store_label: "Amazon.ca".to_string(),
        },
    )
}

#[tokio::test]
async fn widget_pro_in_stock_sends_one_alert() {
    let outbox = Outbox::default();
    let report = checker(IN_STOCK, &outbox).run(URL, PHONE).await.unwrap();

    let result = &report.result;
    assert_eq!(result.title, "Widget Pro");
    assert_eq!(result.deal_price.as_deref(), Some("$219.99"));
    assert_eq!(result.list_price.as_deref(), Some("$279.99"));
    assert_eq!(result.available, Some(true));
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.signals.contains(&Signal::BuyControl));
    assert!(result.signals.contains(&Signal::InStockText));
    assert_eq!(report.decision, Decision::Notify);

    let sent = outbox.0.lock();
    assert_eq!(sent.len(), 1);
    let lines: Vec<&str> = sent[0].lines().collect();
    assert_eq!(lines[0], "IN STOCK - Amazon.ca Deal!");
    assert_eq!(lines[1], "Widget Pro");
    assert_eq!(lines[2], "$219.99");
    assert_eq!(lines[3], "Was $279.99");
    assert_eq!(lines[4], URL);
    assert!(lines[5].starts_with("Sent: "));
}

#[tokio::test]
async fn currently_unavailable_wins_over_stray_add_to_cart() {
    let outbox = Outbox::default();
    let report = checker(UNAVAILABLE, &outbox).run(URL, PHONE).await.unwrap();

    assert_eq!(report.result.title, "Widget Pro");
    assert_eq!(report.result.available, Some(false));
    assert_eq!(report.result.confidence, Confidence::High);
    assert!(report.result.signals.is_empty());
    assert_eq!(report.decision, Decision::Skip);
    assert!(report.notification.is_none());
    assert!(outbox.0.lock().is_empty());
}

#[tokio::test]
async fn robot_check_is_unknown_and_silent() {
    let outbox = Outbox::default();
    let report = checker(ROBOT_CHECK, &outbox).run(URL, PHONE).await.unwrap();

    assert_eq!(report.result.available, None);
    assert_eq!(report.result.confidence, Confidence::Unknown);
    assert_eq!(report.decision, Decision::Skip);
    assert!(outbox.0.lock().is_empty());
}

#[test]
fn extraction_is_deterministic_and_gate_is_stable() {
    let extractor = AvailabilityExtractor::default();
    let first = extractor.extract(IN_STOCK, URL);
    let second = extractor.extract(IN_STOCK, URL);
    assert_eq!(first, second);
    assert_eq!(should_notify(&first), should_notify(&second));
}
