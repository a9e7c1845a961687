//! Rates module - refreshed rate snapshots, selection and the refresh service.

mod rates_model;
mod rates_service;
mod rates_traits;
pub mod selection;

pub use rates_model::{refresh_summary, RatesSnapshot};
pub use rates_service::RatesService;
pub use rates_traits::RatesServiceTrait;
pub use selection::{find_rate, main_currencies, search_rates};
