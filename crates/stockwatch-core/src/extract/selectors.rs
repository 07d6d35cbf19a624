//! CSS selectors for product page parsing.
//!
//! Update this file when the store changes its markup.

use scraper::Selector;
use std::sync::LazyLock;

fn parse(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Title candidates, most specific first.
pub static TITLE: LazyLock<[Selector; 3]> =
    LazyLock::new(|| [parse("#productTitle"), parse("#title"), parse("head > title")]);

/// Current price inside the core price block.
pub static CORE_PRICE: LazyLock<Selector> = LazyLock::new(|| {
    parse(
        "#corePrice_feature_div span.a-price:not(.a-text-price), \
         #corePriceDisplay_desktop_feature_div span.a-price:not(.a-text-price), \
         #apex_desktop span.a-price:not(.a-text-price), \
         span.a-price.aok-align-center:not(.a-text-price)",
    )
});

/// Any current-price block on the page.
pub static ANY_PRICE: LazyLock<Selector> =
    LazyLock::new(|| parse("span.a-price:not(.a-text-price)"));

/// Whole-number part of a price block.
pub static PRICE_WHOLE: LazyLock<Selector> = LazyLock::new(|| parse(".a-price-whole"));

/// Fractional part of a price block.
pub static PRICE_FRACTION: LazyLock<Selector> = LazyLock::new(|| parse(".a-price-fraction"));

/// Screen-reader copy of a price ("$219.99").
pub static PRICE_OFFSCREEN: LazyLock<Selector> = LazyLock::new(|| parse(".a-offscreen"));

/// Strikethrough / original price.
pub static LIST_PRICE: LazyLock<Selector> = LazyLock::new(|| {
    parse(
        "span.a-price.a-text-price span.a-offscreen, \
         .basisPrice .a-offscreen",
    )
});

/// Availability message block.
pub static AVAILABILITY: LazyLock<Selector> = LazyLock::new(|| parse("#availability"));

/// Add-to-cart / buy-now / buy-box controls.
pub static BUY_CONTROL: LazyLock<Selector> = LazyLock::new(|| {
    parse(
        "#add-to-cart-button, \
         #add-to-cart-button-ubb, \
         #buy-now-button, \
         #buybox",
    )
});

/// Cart submission form controls.
pub static CART_FORM: LazyLock<Selector> = LazyLock::new(|| {
    parse(
        "form#addToCart, \
         form[action*='handle-buy-box'], \
         form[action*='cart/add'], \
         input[name='submit.add-to-cart']",
    )
});
