use chrono::{DateTime, Utc};
use fxfeed_feed::RateRecord;
use serde::Serialize;

use super::selection::{find_rate, main_currencies, search_rates};
use crate::errors::{Error, Result};
use crate::fx::CurrencyConverter;

/// The complete outcome of one successful refresh.
///
/// Owned entirely by the caller; nothing inside the crate keeps a copy.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RatesSnapshot {
    rates: Vec<RateRecord>,
    fetched_at: DateTime<Utc>,
}

impl RatesSnapshot {
    pub fn new(rates: Vec<RateRecord>, fetched_at: DateTime<Utc>) -> Self {
        Self { rates, fetched_at }
    }

    pub fn rates(&self) -> &[RateRecord] {
        &self.rates
    }

    pub fn into_rates(self) -> Vec<RateRecord> {
        self.rates
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn main_currencies(&self) -> Vec<&RateRecord> {
        main_currencies(&self.rates)
    }

    pub fn search(&self, query: &str) -> Vec<&RateRecord> {
        search_rates(&self.rates, query)
    }

    pub fn find(&self, code: &str) -> Option<&RateRecord> {
        find_rate(&self.rates, code)
    }

    /// Converter for the record quoted under `code`.
    pub fn converter_for(&self, code: &str) -> Result<CurrencyConverter> {
        self.find(code)
            .and_then(CurrencyConverter::from_record)
            .ok_or_else(|| Error::CurrencyNotFound(code.to_string()))
    }

    /// Status line, e.g. `"Rates updated (152 currencies)."`.
    pub fn summary(&self) -> String {
        refresh_summary(self.rates.len())
    }
}

/// Status line reported after a successful refresh of `count` records.
pub fn refresh_summary(count: usize) -> String {
    format!("Rates updated ({} currencies).", count)
}
