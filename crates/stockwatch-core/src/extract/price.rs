//! Price extraction.

use scraper::{ElementRef, Html};

use super::phrases::DOLLAR_AMOUNT;
use super::selectors::{
    ANY_PRICE, CORE_PRICE, LIST_PRICE, PRICE_FRACTION, PRICE_OFFSCREEN, PRICE_WHOLE,
};
use super::text::element_text;

/// Price read from the structured current-price block.
///
/// The core price containers are searched before any other price block.
pub fn structured_price(document: &Html) -> Option<String> {
    document
        .select(&CORE_PRICE)
        .chain(document.select(&ANY_PRICE))
        .find_map(price_from_region)
}

/// `"$<whole>.<fraction>"` from a price block, or its screen-reader copy.
fn price_from_region(region: ElementRef<'_>) -> Option<String> {
    let whole = region
        .select(&PRICE_WHOLE)
        .next()
        .map(|el| digits(&element_text(el), true))
        .unwrap_or_default();

    if !whole.is_empty() {
        let fraction = region
            .select(&PRICE_FRACTION)
            .next()
            .map(|el| digits(&element_text(el), false))
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| "00".to_string());
        return Some(format!("${}.{}", whole, fraction));
    }

    region
        .select(&PRICE_OFFSCREEN)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Keep ASCII digits, and commas when `keep_commas` is set.
fn digits(text: &str, keep_commas: bool) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || (keep_commas && *c == ','))
        .collect::<String>()
        .trim_matches(',')
        .to_string()
}

/// Smallest plausible dollar amount in `text`, as displayed.
///
/// Only amounts within `[floor, ceiling]` are considered, which keeps
/// unrelated figures on the page (shipping, bundles, financing) out.
pub fn fallback_price(text: &str, floor: f64, ceiling: f64) -> Option<String> {
    DOLLAR_AMOUNT
        .find_iter(text)
        .filter_map(|m| {
            let shown = m.as_str();
            let value: f64 = shown.trim_start_matches('$').replace(',', "").parse().ok()?;
            (floor..=ceiling)
                .contains(&value)
                .then(|| (value, shown.to_string()))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, shown)| shown)
}

/// Strikethrough price, dropped when it equals the deal price.
pub fn list_price(document: &Html, deal_price: Option<&str>) -> Option<String> {
    document
        .select(&LIST_PRICE)
        .map(element_text)
        .find(|text| !text.is_empty())
        .filter(|text| Some(text.as_str()) != deal_price)
}
