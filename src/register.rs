//! Renderer, notifier and checker construction from configuration.

use anyhow::{Context, Result};
use tracing::{info, warn};

use stockwatch_config::{Config, ConfigValidator};
use stockwatch_core::{AvailabilityExtractor, CheckOptions, Checker, ExtractorConfig};
use stockwatch_notify_sms::build_notifier;
use stockwatch_protocols::PageRenderer;
use stockwatch_renderer_chrome::{ChromeRenderer, ChromeRendererConfig, FileRenderer};

use crate::cli::Cli;

/// Renderer for this run: a saved file when `--html-file` is given, Chrome otherwise.
pub(crate) fn build_renderer(cli: &Cli, config: &Config) -> Box<dyn PageRenderer> {
    match cli.html_file {
        Some(ref path) => {
            info!(path = %path.display(), "Using saved page instead of rendering");
            Box::new(FileRenderer::new(path))
        }
        None => Box::new(ChromeRenderer::new(ChromeRendererConfig::from(&config.browser))),
    }
}

/// Wire up a [`Checker`] for this run.
pub(crate) fn build_checker(cli: &Cli, config: &Config) -> Result<Checker> {
    let notifier = build_notifier(&config.notify).context("Failed to set up notifications")?;
    if cli.debug {
        warn!(channel = notifier.channel(), "Debug mode: alerts will not be delivered");
    }

    let extractor = AvailabilityExtractor::new(ExtractorConfig {
        price_floor: config.extract.price_floor,
        price_ceiling: config.extract.price_ceiling,
    });

    Ok(Checker::new(
        build_renderer(cli, config),
        notifier,
        extractor,
        CheckOptions {
            dry_run: cli.debug,
            store_label: config.check.store_label.clone(),
        },
    ))
}

/// URL from the command line, falling back to `check.url`.
pub(crate) fn resolve_url(cli: &Cli, config: &Config) -> Option<String> {
    cli.url.clone().or_else(|| config.check.url.clone())
}

/// Recipient from `--phone`/`STOCKWATCH_PHONE`, falling back to `notify.recipient`.
pub(crate) fn resolve_recipient(cli: &Cli, config: &Config) -> Result<String> {
    let Some(phone) = cli.phone.clone() else {
        // The validator already checked notify.recipient.
        return config.notify.recipient.clone().context(
            "No phone number to alert: pass --phone, set STOCKWATCH_PHONE, or set notify.recipient",
        );
    };
    if let Some(message) = recipient_warning(&phone) {
        warn!(field = "--phone", "{}", message);
    }
    Ok(phone)
}

fn recipient_warning(phone: &str) -> Option<String> {
    (!ConfigValidator::is_e164(phone))
        .then(|| format!("'{}' does not look like an E.164 phone number", phone))
}
