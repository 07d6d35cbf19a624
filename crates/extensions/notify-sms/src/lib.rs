//! # Stockwatch SMS Notifiers
//!
//! [`Notifier`] implementations for alert delivery:
//!
//! - [`TwilioNotifier`]: SMS through the Twilio Messages API
//! - [`LogNotifier`]: writes the alert to the log and reports success

mod log;
mod twilio;

pub use log::LogNotifier;
pub use twilio::{TwilioNotifier, TwilioSender};

use stockwatch_config::{NotifyChannel, NotifyConfig};
use stockwatch_protocols::{Notifier, NotifyError};

/// Build the notifier selected by `config.channel`.
pub fn build_notifier(config: &NotifyConfig) -> Result<Box<dyn Notifier>, NotifyError> {
    match config.channel {
        NotifyChannel::Log => Ok(Box::new(LogNotifier::new())),
        NotifyChannel::Twilio => Ok(Box::new(TwilioNotifier::from_config(&config.twilio)?)),
    }
}
