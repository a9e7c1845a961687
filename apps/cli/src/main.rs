//! fxfeed - GBP exchange rates on the command line.
//!
//! # Usage
//!
//! ```bash
//! # List every rate in the feed
//! fxfeed rates
//!
//! # Only USD, EUR and JPY
//! fxfeed rates --main
//!
//! # Convert 100 GBP to dirham, and 100 dirham back to GBP
//! fxfeed convert AED 100
//! fxfeed convert AED 100 --to-gbp
//!
//! # Refresh every five minutes
//! fxfeed watch --interval 300
//! ```

mod cli;
mod commands;
mod config;
mod main_lib;
mod output;
mod scheduler;

use clap::Parser;

use cli::{Cli, Commands};
use config::Config;
use main_lib::{build_service, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interval = match &cli.command {
        Commands::Watch(args) => args.interval,
        _ => None,
    };
    let config = Config::from_env().with_overrides(cli.url.clone(), interval);
    init_tracing();

    let service = build_service(&config);
    let result = match cli.command {
        Commands::Rates(args) => commands::rates::execute(&service, args, cli.json).await,
        Commands::Convert(args) => commands::convert::execute(&service, args, cli.json).await,
        Commands::Watch(_) => {
            commands::watch::execute(service, config.refresh_interval, cli.json).await
        }
    };

    if let Err(e) = result {
        match e.downcast_ref::<fxfeed_core::Error>() {
            Some(core_error) => {
                tracing::error!("{}", core_error);
                eprintln!("{}", core_error.user_message());
            }
            None => eprintln!("{:#}", e),
        }
        std::process::exit(1);
    }
    Ok(())
}
