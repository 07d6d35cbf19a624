//! Alert decision policy.

use std::fmt;

use stockwatch_protocols::{CheckResult, Confidence};

/// What the checker does with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Send the alert.
    Notify,
    /// Alert warranted, delivery suppressed (dry run).
    Suppressed,
    /// No alert.
    Skip,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Decision::Notify => "notify",
            Decision::Suppressed => "suppressed",
            Decision::Skip => "skip",
        };
        f.write_str(s)
    }
}

/// Whether `result` warrants an alert: available, with high confidence.
///
/// Medium confidence, unavailable and unknown results never alert.
pub fn should_notify(result: &CheckResult) -> bool {
    result.is_available() && result.confidence == Confidence::High
}

/// Decide what to do with `result`. `dry_run` suppresses delivery but keeps
/// the decision visible.
pub fn decide(result: &CheckResult, dry_run: bool) -> Decision {
    match (should_notify(result), dry_run) {
        (true, false) => Decision::Notify,
        (true, true) => Decision::Suppressed,
        (false, _) => Decision::Skip,
    }
}
