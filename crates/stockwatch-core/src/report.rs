//! Human-readable check summary.

use std::fmt::Write;

use stockwatch_protocols::CheckResult;

use crate::policy::Decision;

const RULE_WIDTH: usize = 60;

/// Render the boxed summary printed after every check.
pub fn render_summary(result: &CheckResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "STOCK CHECK RESULT");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Product   : {}", result.title);
    let _ = writeln!(out, "Status    : {}", result.status_line());
    let _ = writeln!(
        out,
        "Deal Price: {}",
        result.deal_price.as_deref().unwrap_or("None")
    );
    if let Some(ref list) = result.list_price {
        let _ = writeln!(out, "List Price: {}", list);
    }
    let _ = writeln!(out, "URL       : {}", result.source_url);
    let _ = write!(out, "{}", rule);
    out
}

/// One-line description of what happened with the alert.
pub fn decision_line(decision: Decision) -> &'static str {
    match decision {
        Decision::Notify => "HIGH CONFIDENCE - sending SMS alert...",
        Decision::Suppressed => "DEBUG MODE: SMS would have been sent",
        Decision::Skip => "No high-confidence stock -> no SMS",
    }
}
