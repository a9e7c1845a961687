//! Periodic rate refresh for the `watch` command.
//!
//! Refreshes run one at a time: the next tick is not awaited until the
//! previous fetch has reported, and ticks missed meanwhile are skipped.

use std::sync::Arc;
use std::time::Duration;

use fxfeed_core::rates::RatesServiceTrait;
use fxfeed_feed::RatesListener;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

/// Runs until the surrounding task is dropped. The first refresh is immediate.
pub async fn run_refresh_loop(
    service: Arc<dyn RatesServiceTrait>,
    period: Duration,
    listener: Arc<dyn RatesListener>,
) {
    info!("Rate refresh scheduler started ({}s interval)", period.as_secs());

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        if let Err(e) = service.refresh_in_background(listener.clone()).await {
            warn!("Refresh task ended abnormally: {}", e);
        }
    }
}
