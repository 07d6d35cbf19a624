//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{Config, NotifyChannel};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(e) => Err(ConfigError::InvalidValue {
                field: e.path,
                message: e.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_check(config, &mut result);
        Self::validate_browser(config, &mut result);
        Self::validate_extract(config, &mut result);
        Self::validate_notify(config, &mut result);

        Ok(result)
    }

    /// Whether `value` looks like an E.164 phone number (`+` and 8-15 digits).
    pub fn is_e164(value: &str) -> bool {
        let Some(digits) = value.strip_prefix('+') else {
            return false;
        };
        (8..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
    }

    fn validate_check(config: &Config, result: &mut ValidationResult) {
        if let Some(ref url) = config.check.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                result.add_error(ValidationError::new(
                    "check.url",
                    "url must start with http:// or https://",
                ));
            }
        }
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        let browser = &config.browser;

        if browser.debug_port == 0 {
            result.add_error(ValidationError::new("browser.debug_port", "Port cannot be 0"));
        }

        for (path, value) in [
            ("browser.marker_timeout_ms", browser.marker_timeout_ms),
            ("browser.load_timeout_ms", browser.load_timeout_ms),
            ("browser.launch_timeout_ms", browser.launch_timeout_ms),
        ] {
            if value == 0 {
                result.add_error(ValidationError::new(path, "timeout must be greater than 0"));
            }
        }

        if browser.marker_selector.trim().is_empty() {
            result.add_error(ValidationError::new(
                "browser.marker_selector",
                "marker_selector cannot be empty",
            ));
        }

        if let Some(ref path) = browser.chrome_path {
            if !path.exists() {
                result.add_warning(ValidationWarning::new(
                    "browser.chrome_path",
                    format!("Chrome binary does not exist: {:?}", path),
                ));
            }
        }
    }

    fn validate_extract(config: &Config, result: &mut ValidationResult) {
        let extract = &config.extract;

        if extract.price_floor < 0.0 {
            result.add_error(ValidationError::new(
                "extract.price_floor",
                "price_floor cannot be negative",
            ));
        }

        if extract.price_floor >= extract.price_ceiling {
            result.add_error(ValidationError::new(
                "extract.price_floor",
                "price_floor must be below price_ceiling",
            ));
        }
    }

    fn validate_notify(config: &Config, result: &mut ValidationResult) {
        let notify = &config.notify;

        if let Some(ref recipient) = notify.recipient {
            if !Self::is_e164(recipient) {
                result.add_warning(ValidationWarning::new(
                    "notify.recipient",
                    format!("'{}' does not look like an E.164 phone number", recipient),
                ));
            }
        }

        match notify.channel {
            NotifyChannel::Log => {
                result.add_warning(ValidationWarning::new(
                    "notify.channel",
                    "Log channel selected, alerts will not be delivered by SMS",
                ));
            }
            NotifyChannel::Twilio => {
                let twilio = &notify.twilio;
                if twilio.account_sid.is_none() {
                    result.add_error(ValidationError::new(
                        "notify.twilio.account_sid",
                        "account_sid is required for the twilio channel",
                    ));
                }
                if twilio.auth_token.is_none() {
                    result.add_error(ValidationError::new(
                        "notify.twilio.auth_token",
                        "auth_token is required for the twilio channel",
                    ));
                }
                if twilio.from.is_none() && twilio.messaging_service_sid.is_none() {
                    result.add_error(ValidationError::new(
                        "notify.twilio.from",
                        "either from or messaging_service_sid is required",
                    ));
                }
                if !twilio.base_url.starts_with("http://") && !twilio.base_url.starts_with("https://") {
                    result.add_error(ValidationError::new(
                        "notify.twilio.base_url",
                        "base_url must start with http:// or https://",
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
