//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

/// GBP exchange rates from the fx-exchange.com RSS feed.
#[derive(Parser, Debug)]
#[command(name = "fxfeed", version, about, long_about = None)]
pub struct Cli {
    /// Feed URL (overrides FXFEED_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the feed once and list the rates
    Rates(RatesArgs),
    /// Convert an amount between GBP and another currency
    Convert(ConvertArgs),
    /// Refresh the rates periodically until interrupted
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Only show currencies whose code or name contains this text
    #[arg(long, short)]
    pub search: Option<String>,

    /// Only show the main currencies (USD, EUR, JPY)
    #[arg(long, conflicts_with = "search")]
    pub main: bool,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Currency code quoted against GBP, e.g. AED
    pub code: String,

    /// Amount to convert
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Treat the amount as the foreign currency and convert it to GBP
    #[arg(long)]
    pub to_gbp: bool,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between refreshes (overrides FXFEED_REFRESH_INTERVAL_SECS)
    #[arg(long, short)]
    pub interval: Option<u64>,
}
