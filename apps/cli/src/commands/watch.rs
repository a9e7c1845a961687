use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use fxfeed_core::rates::{main_currencies, refresh_summary, RatesService};
use fxfeed_feed::{RateRecord, RatesListener};
use tracing::{error, info};

use crate::output::print_rates;
use crate::scheduler::run_refresh_loop;

/// Prints each refresh outcome as it arrives from the worker task.
struct ConsoleListener {
    json: bool,
}

impl RatesListener for ConsoleListener {
    fn on_rates_parsed(&self, rates: Vec<RateRecord>) {
        let heading = format!("[{}] Main currencies", Local::now().format("%H:%M:%S"));
        if let Err(e) = print_rates(&heading, &main_currencies(&rates), self.json) {
            error!("Failed to print rates: {}", e);
            return;
        }
        if !self.json {
            println!("{}", refresh_summary(rates.len()));
        }
    }

    fn on_error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

pub async fn execute(service: RatesService, period: Duration, json: bool) -> Result<()> {
    let listener = Arc::new(ConsoleListener { json });

    tokio::select! {
        _ = run_refresh_loop(Arc::new(service), period, listener) => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("Stopping rate refresh");
        }
    }
    Ok(())
}
