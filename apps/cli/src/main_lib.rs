use std::sync::Arc;

use fxfeed_core::rates::RatesService;
use fxfeed_feed::FeedFetcher;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub fn init_tracing() {
    let log_format = std::env::var("FXFEED_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_service(config: &Config) -> RatesService {
    tracing::debug!(
        "Using feed {} (timeout {:?})",
        config.feed_url,
        config.request_timeout
    );
    let fetcher = FeedFetcher::with_timeout(config.feed_url.clone(), config.request_timeout);
    RatesService::new(Arc::new(fetcher))
}
