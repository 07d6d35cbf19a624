//! # Stockwatch Core
//!
//! The decision logic of the monitor:
//!
//! - [`AvailabilityExtractor`] turns a rendered product page into a [`CheckResult`]
//! - [`should_notify`] is the alert gate
//! - [`Checker`] runs render, extract and notify for one URL

pub mod alert;
pub mod checker;
pub mod extract;
pub mod policy;
pub mod report;

pub use alert::format_alert;
pub use checker::{CheckError, CheckOptions, CheckReport, Checker};
pub use extract::{AvailabilityExtractor, ExtractorConfig};
pub use policy::{decide, should_notify, Decision};
pub use report::{decision_line, render_summary};

pub use stockwatch_protocols::{CheckResult, Confidence, Signal};
