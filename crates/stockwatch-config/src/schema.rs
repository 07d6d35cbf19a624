//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub notify: NotifyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What to check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Product page URL, used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Store name shown in the alert headline.
    #[serde(default = "default_store_label")]
    pub store_label: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            url: None,
            store_label: default_store_label(),
        }
    }
}

fn default_store_label() -> String {
    "Amazon".to_string()
}

/// Headless browser settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Chrome/Chromium binary. Well-known install locations are searched when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<PathBuf>,

    #[serde(default = "default_debug_port")]
    pub debug_port: u16,

    #[serde(default = "default_true")]
    pub headless: bool,

    /// Profile directory. A throwaway directory is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_dir: Option<PathBuf>,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    #[serde(default = "default_lang")]
    pub lang: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Element whose appearance marks the page as settled.
    #[serde(default = "default_marker_selector")]
    pub marker_selector: String,

    #[serde(default = "default_marker_timeout_ms")]
    pub marker_timeout_ms: u64,

    #[serde(default = "default_load_timeout_ms")]
    pub load_timeout_ms: u64,

    #[serde(default = "default_launch_timeout_ms")]
    pub launch_timeout_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            debug_port: default_debug_port(),
            headless: true,
            profile_dir: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
            lang: default_lang(),
            user_agent: default_user_agent(),
            marker_selector: default_marker_selector(),
            marker_timeout_ms: default_marker_timeout_ms(),
            load_timeout_ms: default_load_timeout_ms(),
            launch_timeout_ms: default_launch_timeout_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_debug_port() -> u16 {
    9222
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

fn default_lang() -> String {
    "en-CA".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
        .to_string()
}

fn default_marker_selector() -> String {
    "#productTitle".to_string()
}

fn default_marker_timeout_ms() -> u64 {
    15_000
}

fn default_load_timeout_ms() -> u64 {
    30_000
}

fn default_launch_timeout_ms() -> u64 {
    10_000
}

/// Extraction tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Lowest plausible price for the fallback text scan.
    #[serde(default = "default_price_floor")]
    pub price_floor: f64,

    /// Highest plausible price for the fallback text scan.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            price_floor: default_price_floor(),
            price_ceiling: default_price_ceiling(),
        }
    }
}

fn default_price_floor() -> f64 {
    100.0
}

fn default_price_ceiling() -> f64 {
    300.0
}

/// Notification channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyChannel {
    /// Write the alert to the log only.
    #[default]
    Log,
    /// Send an SMS through Twilio.
    Twilio,
}

/// Notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default)]
    pub channel: NotifyChannel,

    /// Default recipient (E.164 phone number).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(default)]
    pub twilio: TwilioConfig,
}

/// Twilio credentials and sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Sending phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Messaging service, used instead of `from` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_service_sid: Option<String>,

    #[serde(default = "default_twilio_base_url")]
    pub base_url: String,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            from: None,
            messaging_service_sid: None,
            base_url: default_twilio_base_url(),
        }
    }
}

fn default_twilio_base_url() -> String {
    "https://api.twilio.com".to_string()
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily-rotated log files. Console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// File receiving one line per invocation with its exit code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_log: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
            run_log: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Root of stockwatch's per-user state (`~/.stockwatch`).
pub fn stockwatch_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".stockwatch"))
        .unwrap_or_else(|| PathBuf::from(".stockwatch"))
}
