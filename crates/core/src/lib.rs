//! fxfeed Core - rate selection and currency conversion.
//!
//! This crate sits between the feed pipeline in `fxfeed-feed` and whatever
//! presents the rates. It owns no long-lived state: every refresh produces a
//! fresh [`rates::RatesSnapshot`] that belongs to the caller.

pub mod constants;
pub mod errors;
pub mod fx;
pub mod rates;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
