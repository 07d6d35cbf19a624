//! Notification errors.

use thiserror::Error;

/// Errors raised while building a notifier.
///
/// Delivery failures are not errors: they are reported through
/// [`crate::NotifyOutcome`] so a check result is never invalidated by them.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notifier not configured: {0}")]
    NotConfigured(String),
}
