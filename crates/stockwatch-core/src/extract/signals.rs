//! Availability signal detection and classification.

use scraper::Html;
use stockwatch_protocols::{Confidence, Signal, SignalKind};

use super::phrases::{promises_delivery, says_in_stock, FEW_LEFT};
use super::selectors::{AVAILABILITY, BUY_CONTROL, CART_FORM};
use super::text::element_text;

/// Signals present in the document. `text` is the lowercased visible text.
pub fn detect(document: &Html, text: &str) -> Vec<Signal> {
    Signal::ALL
        .into_iter()
        .filter(|signal| fires(*signal, document, text))
        .collect()
}

fn fires(signal: Signal, document: &Html, text: &str) -> bool {
    match signal {
        Signal::InStockText => match document.select(&AVAILABILITY).next() {
            Some(block) => says_in_stock(&element_text(block).to_lowercase()),
            None => says_in_stock(text),
        },
        Signal::FewLeftInStock => FEW_LEFT.is_match(text),
        Signal::DeliveryPromise => promises_delivery(text),
        Signal::BuyControl => document.select(&BUY_CONTROL).next().is_some(),
        Signal::CartForm => document.select(&CART_FORM).next().is_some(),
    }
}

/// Sum of the weights of `signals`.
pub fn score(signals: &[Signal]) -> u32 {
    signals.iter().map(Signal::weight).sum()
}

/// Map fired signals to `(available, confidence)`.
///
/// High confidence needs a purchase control and stock wording together.
/// Anything short of that which still fired is medium. Nothing fired means
/// the item is treated as unavailable, with low confidence.
pub fn classify(signals: &[Signal]) -> (Option<bool>, Confidence) {
    if signals.is_empty() {
        return (Some(false), Confidence::Low);
    }

    let structural = signals.iter().any(|s| s.kind() == SignalKind::Structural);
    let textual = signals.iter().any(|s| s.kind() == SignalKind::Textual);

    if structural && textual {
        (Some(true), Confidence::High)
    } else {
        (Some(true), Confidence::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_in(body: &str) -> Vec<Signal> {
        let html = Html::parse_document(&format!("<html><body>{}</body></html>", body));
        let text = super::super::text::visible_text(&html).to_lowercase();
        detect(&html, &text)
    }

    #[test]
    fn test_no_signals() {
        assert!(detect_in("<p>Widget Pro</p>").is_empty());
    }

    #[test]
    fn test_availability_block_in_stock() {
        let signals = detect_in(r#"<div id="availability"><span> In Stock </span></div>"#);
        assert_eq!(signals, vec![Signal::InStockText]);
    }

    #[test]
    fn test_availability_block_overrides_page_text() {
        // Page text elsewhere says "in stock" but the availability block does not.
        let signals = detect_in(
            r#"<div id="availability"><span>Usually ships within 2 to 3 weeks</span></div>
               <p>Other sellers have this in stock</p>"#,
        );
        assert!(!signals.contains(&Signal::InStockText));
    }

    #[test]
    fn test_few_left() {
        let signals = detect_in("<div id=\"availability\">Only 2 left in stock - order soon.</div>");
        assert!(signals.contains(&Signal::InStockText));
        assert!(signals.contains(&Signal::FewLeftInStock));
    }

    #[test]
    fn test_delivery_promise() {
        let signals = detect_in("<span>FREE delivery Friday, March 7</span>");
        assert_eq!(signals, vec![Signal::DeliveryPromise]);
    }

    #[test]
    fn test_structural_controls() {
        let signals = detect_in(
            r#"<form id="addToCart" action="/gp/product/handle-buy-box">
                 <input id="add-to-cart-button" name="submit.add-to-cart" type="submit">
               </form>"#,
        );
        assert_eq!(signals, vec![Signal::BuyControl, Signal::CartForm]);
    }

    #[test]
    fn test_score() {
        assert_eq!(score(&[]), 0);
        assert_eq!(score(&[Signal::InStockText, Signal::BuyControl]), 6);
        assert_eq!(score(&Signal::ALL), 13);
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(&[]), (Some(false), Confidence::Low));
    }

    #[test]
    fn test_classify_structural_and_textual() {
        assert_eq!(
            classify(&[Signal::BuyControl, Signal::InStockText]),
            (Some(true), Confidence::High)
        );
        assert_eq!(
            classify(&[Signal::CartForm, Signal::FewLeftInStock]),
            (Some(true), Confidence::High)
        );
    }

    #[test]
    fn test_classify_delivery_is_not_stock_confirmation() {
        assert_eq!(
            classify(&[Signal::BuyControl, Signal::CartForm, Signal::DeliveryPromise]),
            (Some(true), Confidence::Medium)
        );
    }

    #[test]
    fn test_classify_single_weak_signal() {
        assert_eq!(
            classify(&[Signal::DeliveryPromise]),
            (Some(true), Confidence::Medium)
        );
        assert_eq!(
            classify(&[Signal::InStockText]),
            (Some(true), Confidence::Medium)
        );
    }
}
