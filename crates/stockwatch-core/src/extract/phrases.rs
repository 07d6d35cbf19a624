//! Phrase lists and patterns matched against lowercased page text.

use regex::Regex;
use std::sync::LazyLock;

/// Text that means the item cannot be bought right now.
pub const UNAVAILABLE_PHRASES: [&str; 3] = [
    "currently unavailable",
    "temporarily out of stock",
    "join waitlist",
];

/// "We don't know when or if this item will be back in stock."
pub static BACK_IN_STOCK_UNKNOWN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"we don['’]?t know when.{0,80}?back in stock").expect("valid regex")
});

/// Interstitials served instead of the product page.
pub const BOT_CHECK_PHRASES: [&str; 3] = [
    "enter the characters you see below",
    "to discuss automated access",
    "make sure you're not a robot",
];

/// Delivery promises shown for purchasable items.
pub const DELIVERY_PHRASES: [&str; 6] = [
    "get it by",
    "delivery",
    "arrives",
    "arrives before",
    "free delivery",
    "in stock on",
];

pub static IN_STOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bin stock\b").expect("valid regex"));

pub static FEW_LEFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"only \d+ left in stock").expect("valid regex"));

/// `$NNN.NN`, `$N,NNN.NN`: three or more integer digits, or a thousands
/// separator, followed by exactly two decimals.
pub static DOLLAR_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(\d{1,3}(?:,\d{3})+|\d{3,})\.\d{2}\b").expect("valid regex")
});

/// Whether `text` (lowercased) says the item is unavailable.
pub fn says_unavailable(text: &str) -> Option<&'static str> {
    UNAVAILABLE_PHRASES
        .iter()
        .copied()
        .find(|phrase| text.contains(phrase))
        .or_else(|| {
            BACK_IN_STOCK_UNKNOWN
                .is_match(text)
                .then_some("we don't know when ... back in stock")
        })
}

/// Whether `text` (lowercased) is a bot-check page.
pub fn is_bot_check(text: &str) -> bool {
    BOT_CHECK_PHRASES.iter().any(|phrase| text.contains(phrase))
}

/// Whether `text` (lowercased) says the item is in stock now.
///
/// "in stock on <date>" is a backorder date and "not in stock" a negation;
/// neither counts.
pub fn says_in_stock(text: &str) -> bool {
    IN_STOCK.find_iter(text).any(|m| {
        let before = text[..m.start()].trim_end();
        let after = text[m.end()..].trim_start();
        !ends_with_word(before, "not") && !starts_with_word(after, "on")
    })
}

fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word)
        .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric()))
}

fn ends_with_word(text: &str, word: &str) -> bool {
    text.strip_suffix(word)
        .is_some_and(|rest| !rest.ends_with(|c: char| c.is_alphanumeric()))
}

/// Whether `text` (lowercased) promises delivery.
pub fn promises_delivery(text: &str) -> bool {
    DELIVERY_PHRASES.iter().any(|phrase| text.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_says_unavailable_fixed_phrases() {
        assert_eq!(
            says_unavailable("this item is currently unavailable."),
            Some("currently unavailable")
        );
        assert_eq!(
            says_unavailable("temporarily out of stock. order now"),
            Some("temporarily out of stock")
        );
        assert_eq!(says_unavailable("join waitlist"), Some("join waitlist"));
        assert_eq!(says_unavailable("in stock. get it by tomorrow"), None);
    }

    #[test]
    fn test_says_unavailable_back_in_stock_pattern() {
        assert!(says_unavailable("we don't know when or if this item will be back in stock.").is_some());
        assert!(says_unavailable("we don’t know when or if this item will be back in stock.").is_some());
        assert!(says_unavailable("we dont know when it will be back in stock").is_some());
        assert!(says_unavailable("back in stock soon").is_none());
    }

    #[test]
    fn test_is_bot_check() {
        assert!(is_bot_check("type the characters... enter the characters you see below"));
        assert!(!is_bot_check("widget pro in stock"));
    }

    #[test]
    fn test_promises_delivery() {
        assert!(promises_delivery("free delivery friday"));
        assert!(promises_delivery("get it by tomorrow"));
        assert!(!promises_delivery("widget pro"));
    }

    #[test]
    fn test_in_stock_word_boundary() {
        assert!(IN_STOCK.is_match("in stock."));
        assert!(!IN_STOCK.is_match("within stockholm"));
    }

    #[test]
    fn test_says_in_stock() {
        assert!(says_in_stock("in stock"));
        assert!(says_in_stock("in stock. ships from and sold by amazon.ca"));
        assert!(says_in_stock("only 2 left in stock - order soon."));
        assert!(says_in_stock("in stock online and in stores"));
        assert!(says_in_stock("cannot say. in stock"));
    }

    #[test]
    fn test_says_in_stock_ignores_backorder_date() {
        assert!(!says_in_stock("in stock on december 5, 2026."));
        assert!(!says_in_stock("in stock  on\nmarch 1"));
        assert!(promises_delivery("in stock on december 5, 2026."));
    }

    #[test]
    fn test_says_in_stock_ignores_negation() {
        assert!(!says_in_stock("this item is not in stock"));
        assert!(!says_in_stock("not  in stock at this location"));
        assert!(says_in_stock("knot in stock"));
    }

    #[test]
    fn test_says_in_stock_any_occurrence() {
        assert!(says_in_stock("in stock on may 1. other sizes: in stock."));
    }

    #[test]
    fn test_few_left() {
        assert!(FEW_LEFT.is_match("only 3 left in stock - order soon."));
        assert!(!FEW_LEFT.is_match("only a few left"));
    }

    #[test]
    fn test_dollar_amount_pattern() {
        let found: Vec<&str> = DOLLAR_AMOUNT
            .find_iter("was $219.99 now $189.00, ships for $12.99, bundle $1,249.00")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["$219.99", "$189.00", "$1,249.00"]);
    }
}
