//! stockwatch - product availability monitor
//!
//! Renders one product page, decides whether it is in stock, and sends an SMS
//! alert when it is confidently available. Meant to be run from cron or a
//! systemd timer.

mod cli;
mod logging;
mod register;
mod runlog;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use stockwatch_config::{Config, ConfigLoader, ConfigValidator};
use stockwatch_core::{decision_line, render_summary, CheckReport, Decision};

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ConfigLoader::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load {}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init_tracing(&config.logging) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let url = register::resolve_url(&cli, &config);
    let exit_code: u8 = match run(&cli, &config, url.as_deref()).await {
        Ok(report) => {
            print_report(&cli, &report);
            0
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    };

    if let Some(ref path) = config.logging.run_log {
        let url = url.as_deref().unwrap_or("-");
        if let Err(e) = runlog::append(path, url, exit_code) {
            warn!(path = %path.display(), "Failed to write run log: {}", e);
        }
    }

    info!(exit_code, "Done");
    ExitCode::from(exit_code)
}

async fn run(cli: &Cli, config: &Config, url: Option<&str>) -> Result<CheckReport> {
    for warning in ConfigValidator::validate(config)?
        .into_result()
        .context("Invalid configuration")?
    {
        warn!(field = %warning.path, "{}", warning.message);
    }

    let url = url.context("No URL given: pass one as an argument or set check.url")?;
    let recipient = register::resolve_recipient(cli, config)?;
    let checker = register::build_checker(cli, config)?;

    Ok(checker.run(url, &recipient).await?)
}

fn print_report(cli: &Cli, report: &CheckReport) {
    // In JSON mode stdout carries only the document.
    if cli.json {
        match serde_json::to_string_pretty(&report.result) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize result: {}", e),
        }
        eprintln!("{}", decision_line(report.decision));
    } else {
        println!("{}", render_summary(&report.result));
        println!("{}", decision_line(report.decision));
    }

    if report.decision == Decision::Notify {
        if let Some(ref outcome) = report.notification {
            if outcome.success {
                eprintln!("SMS sent via {}", outcome.channel);
            } else {
                eprintln!("SMS failed: {}", outcome.message);
            }
        }
    }
}
