use async_trait::async_trait;
use chrono::Utc;
use fxfeed_feed::{spawn_fetch, RateFeed, RatesListener};
use std::sync::Arc;
use tokio::task::JoinHandle;

use super::rates_model::RatesSnapshot;
use super::rates_traits::RatesServiceTrait;
use crate::errors::Result;

#[derive(Clone)]
pub struct RatesService {
    feed: Arc<dyn RateFeed>,
}

impl RatesService {
    pub fn new(feed: Arc<dyn RateFeed>) -> Self {
        Self { feed }
    }

    pub fn feed_url(&self) -> &str {
        self.feed.url()
    }
}

#[async_trait]
impl RatesServiceTrait for RatesService {
    async fn refresh(&self) -> Result<RatesSnapshot> {
        let rates = self.feed.fetch_rates().await?;

        let snapshot = RatesSnapshot::new(rates, Utc::now());
        log::info!("{}", snapshot.summary());
        Ok(snapshot)
    }

    fn refresh_in_background(&self, listener: Arc<dyn RatesListener>) -> JoinHandle<()> {
        spawn_fetch(self.feed.clone(), listener)
    }
}
