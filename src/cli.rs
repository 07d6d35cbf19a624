//! CLI definitions for stockwatch.

use std::path::PathBuf;

use clap::Parser;

/// Check a product page once and text a phone when it is confidently in stock.
#[derive(Debug, Parser)]
#[command(name = "stockwatch")]
#[command(about = "Product availability monitor with SMS alerts")]
#[command(version)]
pub(crate) struct Cli {
    /// Product page URL (defaults to `check.url` from the config file)
    pub url: Option<String>,

    /// Phone number to alert, in E.164 format (e.g. +15551234567)
    #[arg(short, long, env = "STOCKWATCH_PHONE")]
    pub phone: Option<String>,

    /// Run the full check but don't actually send the SMS
    #[arg(long)]
    pub debug: bool,

    /// Configuration file path
    #[arg(short, long, env = "STOCKWATCH_CONFIG", default_value = "stockwatch.toml")]
    pub config: PathBuf,

    /// Extract from a saved HTML file instead of rendering the URL
    #[arg(long, value_name = "PATH")]
    pub html_file: Option<PathBuf>,

    /// Print the result as JSON instead of the summary box
    #[arg(long)]
    pub json: bool,
}
