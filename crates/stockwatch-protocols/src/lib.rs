//! # Stockwatch Protocols
//!
//! Core protocol definitions for the stockwatch monitor.
//! Contains only interface definitions and the shared result types.
//!
//! ## Core Traits
//!
//! - [`PageRenderer`] - Turns a URL into the rendered HTML document
//! - [`Notifier`] - Delivers a short text message to one recipient

pub mod error;
pub mod notifier;
pub mod renderer;
pub mod result;

pub use error::{NotifyError, RenderError};
pub use notifier::{Notifier, NotifyOutcome};
pub use renderer::PageRenderer;
pub use result::{CheckResult, Confidence, Signal, SignalKind, UNKNOWN_TITLE};
