use super::*;

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use stockwatch_protocols::Confidence;

const IN_STOCK_PAGE: &str = r#"<html><head><title>Widget Pro</title></head><body>
    <span id="productTitle">Widget Pro</span>
    <div id="corePrice_feature_div"><span class="a-price"><span class="a-offscreen">$219.99</span></span></div>
    <div id="availability"><span>In Stock</span></div>
    <input id="add-to-cart-button" type="submit" value="Add to Cart">
</body></html>"#;

const MEDIUM_PAGE: &str = r#"<html><body>
    <span id="productTitle">Widget Pro</span>
    <p>FREE delivery Tuesday</p>
</body></html>"#;

struct StaticRenderer {
    html: Result<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StaticRenderer {
    fn ok(html: &str) -> Self {
        Self {
            html: Ok(html.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            html: Err(message.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl PageRenderer for StaticRenderer {
    fn name(&self) -> &str {
        "static"
    }

    async fn render(&self, url: &str) -> Result<String, RenderError> {
        self.calls.lock().push(url.to_string());
        match self.html {
            Ok(ref html) => Ok(html.clone()),
            Err(ref message) => Err(RenderError::NavigationFailed(message.clone())),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn channel(&self) -> &str {
        "recording"
    }

    async fn notify(&self, recipient: &str, text: &str) -> NotifyOutcome {
        self.sent.lock().push((recipient.to_string(), text.to_string()));
        if self.fail {
            NotifyOutcome::failed("recording", "provider rejected message")
        } else {
            NotifyOutcome::delivered("recording", "queued", Some("SM1".to_string()))
        }
    }
}

fn checker(
    renderer: StaticRenderer,
    notifier: RecordingNotifier,
    dry_run: bool,
) -> Checker {
    Checker::new(
        Box::new(renderer),
        Box::new(notifier),
        AvailabilityExtractor::default(),
        CheckOptions {
            dry_run,
            store_label: "Amazon.ca".to_string(),
        },
    )
}

#[tokio::test]
async fn test_high_confidence_notifies_once() {
    let notifier = RecordingNotifier::default();
    let sent = notifier.sent.clone();
    let checker = checker(StaticRenderer::ok(IN_STOCK_PAGE), notifier, false);

    let report = checker
        .run("https://www.amazon.ca/dp/X", "+15551234567")
        .await
        .unwrap();

    assert_eq!(report.result.available, Some(true));
    assert_eq!(report.result.confidence, Confidence::High);
    assert_eq!(report.decision, Decision::Notify);
    assert!(report.notification.as_ref().unwrap().success);

    let sent = sent.lock();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "+15551234567");
    assert!(sent[0].1.starts_with("IN STOCK - Amazon.ca Deal!\nWidget Pro\n$219.99\n"));
}

#[tokio::test]
async fn test_dry_run_suppresses_delivery() {
    let notifier = RecordingNotifier::default();
    let sent = notifier.sent.clone();
    let checker = checker(StaticRenderer::ok(IN_STOCK_PAGE), notifier, true);

    let report = checker.run("https://example.com", "+15551234567").await.unwrap();

    assert_eq!(report.decision, Decision::Suppressed);
    assert!(report.notification.is_none());
    assert!(sent.lock().is_empty());
}

#[tokio::test]
async fn test_medium_confidence_skips() {
    let notifier = RecordingNotifier::default();
    let sent = notifier.sent.clone();
    let checker = checker(StaticRenderer::ok(MEDIUM_PAGE), notifier, false);

    let report = checker.run("https://example.com", "+15551234567").await.unwrap();

    assert_eq!(report.result.available, Some(true));
    assert_eq!(report.result.confidence, Confidence::Medium);
    assert_eq!(report.decision, Decision::Skip);
    assert!(sent.lock().is_empty());
}

#[tokio::test]
async fn test_render_failure_is_fatal() {
    let notifier = RecordingNotifier::default();
    let sent = notifier.sent.clone();
    let checker = checker(StaticRenderer::failing("net::ERR_NAME_NOT_RESOLVED"), notifier, false);

    let err = checker
        .run("https://nowhere.invalid", "+15551234567")
        .await
        .unwrap_err();

    let CheckError::Render { url, source } = err;
    assert_eq!(url, "https://nowhere.invalid");
    assert!(matches!(source, RenderError::NavigationFailed(_)));
    assert!(sent.lock().is_empty());
}

#[tokio::test]
async fn test_notify_failure_still_reports() {
    let notifier = RecordingNotifier {
        fail: true,
        ..Default::default()
    };
    let checker = checker(StaticRenderer::ok(IN_STOCK_PAGE), notifier, false);

    let report = checker.run("https://example.com", "+15551234567").await.unwrap();

    assert_eq!(report.decision, Decision::Notify);
    let outcome = report.notification.unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.message, "provider rejected message");
}

#[tokio::test]
async fn test_renderer_receives_url() {
    let renderer = StaticRenderer::ok(MEDIUM_PAGE);
    let calls = renderer.calls.clone();
    let checker = checker(renderer, RecordingNotifier::default(), false);

    checker.run("https://example.com/dp/1", "+1555").await.unwrap();

    assert_eq!(calls.lock().as_slice(), ["https://example.com/dp/1".to_string()]);
}
