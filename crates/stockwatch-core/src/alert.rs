//! Alert message formatting.

use chrono::{DateTime, TimeZone};
use stockwatch_protocols::CheckResult;

/// Longest title kept in an alert before it is cut.
pub const MAX_TITLE_CHARS: usize = 70;

/// Longest alert message. Longer messages are cut and end with `...`.
pub const MAX_MESSAGE_CHARS: usize = 1600;

/// Characters kept from an over-long message, before the `...`.
pub const TRUNCATED_MESSAGE_CHARS: usize = 1595;

const ELLIPSIS: &str = "...";

/// Keep the first `keep` characters of `text` plus `...` when `text` is
/// longer than `max` characters.
pub fn truncate_with_ellipsis(text: &str, max: usize, keep: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Build the in-stock SMS for `result`.
///
/// ```text
/// IN STOCK - Amazon.ca Deal!
/// <title, cut to 70 chars>
/// <deal price or "Price N/A">
/// Was <list price>
/// <url>
/// Sent: Dec 01, 2025 09:30
/// ```
pub fn format_alert<Tz>(result: &CheckResult, store_label: &str, sent_at: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let title = truncate_with_ellipsis(&result.title, MAX_TITLE_CHARS, MAX_TITLE_CHARS);
    let price = result.deal_price.as_deref().unwrap_or("Price N/A");

    let mut lines = vec![
        format!("IN STOCK - {} Deal!", store_label),
        title,
        price.to_string(),
    ];
    if let Some(ref list) = result.list_price {
        if list != price {
            lines.push(format!("Was {}", list));
        }
    }
    lines.push(result.source_url.clone());
    lines.push(format!("Sent: {}", sent_at.format("%b %d, %Y %H:%M")));

    truncate_with_ellipsis(&lines.join("\n"), MAX_MESSAGE_CHARS, TRUNCATED_MESSAGE_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sent_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 1, 9, 30, 0).unwrap()
    }

    fn in_stock() -> CheckResult {
        let mut result = CheckResult::unknown("https://www.amazon.ca/dp/B0DGJJKWW7");
        result.title = "Widget Pro".to_string();
        result.deal_price = Some("$219.99".to_string());
        result.available = Some(true);
        result
    }

    #[test]
    fn test_format_alert_basic() {
        let message = format_alert(&in_stock(), "Amazon.ca", sent_at());
        assert_eq!(
            message,
            "IN STOCK - Amazon.ca Deal!\nWidget Pro\n$219.99\n\
             https://www.amazon.ca/dp/B0DGJJKWW7\nSent: Dec 01, 2025 09:30"
        );
    }

    #[test]
    fn test_format_alert_with_list_price() {
        let mut result = in_stock();
        result.list_price = Some("$279.99".to_string());
        let message = format_alert(&result, "Amazon.ca", sent_at());
        assert!(message.contains("\n$219.99\nWas $279.99\n"));
    }

    #[test]
    fn test_format_alert_without_price() {
        let mut result = in_stock();
        result.deal_price = None;
        let message = format_alert(&result, "Amazon.ca", sent_at());
        assert!(message.contains("\nPrice N/A\n"));
    }

    #[test]
    fn test_format_alert_long_title() {
        let mut result = in_stock();
        result.title = "x".repeat(100);
        let message = format_alert(&result, "Amazon.ca", sent_at());
        let title_line = message.lines().nth(1).unwrap();
        assert_eq!(title_line, format!("{}...", "x".repeat(70)));
    }

    #[test]
    fn test_format_alert_caps_length() {
        let mut result = in_stock();
        result.source_url = format!("https://example.com/{}", "a".repeat(2000));
        let message = format_alert(&result, "Amazon.ca", sent_at());
        assert_eq!(message.chars().count(), TRUNCATED_MESSAGE_CHARS + 3);
        assert!(message.ends_with("..."));
        assert!(message.starts_with("IN STOCK - Amazon.ca Deal!\n"));
    }

    #[test]
    fn test_format_alert_at_limit_is_untouched() {
        let mut result = in_stock();
        let base = format_alert(&result, "Amazon.ca", sent_at()).chars().count();
        result.source_url.push_str(&"a".repeat(MAX_MESSAGE_CHARS - base));
        let message = format_alert(&result, "Amazon.ca", sent_at());
        assert_eq!(message.chars().count(), MAX_MESSAGE_CHARS);
        assert!(message.ends_with("09:30"));
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10, 7), "short");
        assert_eq!(truncate_with_ellipsis("abcdefghij", 10, 7), "abcdefghij");
        assert_eq!(truncate_with_ellipsis("abcdefghijk", 10, 5), "abcde...");
        assert_eq!(truncate_with_ellipsis("ééééé", 4, 4), "éééé...");
    }
}
