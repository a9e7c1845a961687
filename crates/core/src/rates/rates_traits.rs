use async_trait::async_trait;
use fxfeed_feed::RatesListener;
use std::sync::Arc;
use tokio::task::JoinHandle;

use super::rates_model::RatesSnapshot;
use crate::errors::Result;

/// Trait defining the contract for rate refresh operations.
///
/// Periodic and manual refresh go through the same methods. Implementations do
/// not serialize concurrent calls; callers must not overlap refreshes.
#[async_trait]
pub trait RatesServiceTrait: Send + Sync {
    /// Fetches the feed and returns a complete snapshot, or an error and no rates.
    async fn refresh(&self) -> Result<RatesSnapshot>;

    /// Fetches on a worker task and reports to `listener` exactly once.
    fn refresh_in_background(&self, listener: Arc<dyn RatesListener>) -> JoinHandle<()>;
}
