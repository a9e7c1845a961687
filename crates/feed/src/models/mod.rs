//! Data types produced by the feed pipeline.

mod rate_record;

pub use rate_record::{RateRecord, RateRecordBuilder};
