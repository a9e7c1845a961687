//! fxfeed Feed Crate
//!
//! This crate downloads the GBP exchange-rate RSS feed and recovers one
//! [`RateRecord`] per `<item>` element.
//!
//! # Pipeline
//!
//! ```text
//! +------------------+
//! |     Fetcher      |  (one HTTP GET, full body as text)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Sanitizer     |  (trim to "<?" ... "</rss>")
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | Tag-stream parse |  (awaiting item / inside item)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | Field extractors |  (title -> code/name, description -> rate)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   RateRecord     |
//! +------------------+
//! ```
//!
//! Network and parse failures abort the whole fetch. Field-level misses only
//! leave the affected record partially populated.

pub mod constants;
pub mod errors;
pub mod extract;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod sanitize;

pub use constants::{BASE_CURRENCY, DEFAULT_FEED_URL};
pub use errors::{FetchError, ParseError};
pub use extract::{extract_rate, extract_title, TitleFields};
pub use fetcher::{fetch, spawn_fetch, FeedFetcher, RateFeed, RatesListener};
pub use models::RateRecord;
pub use parser::{parse_feed, parse_rates};
pub use sanitize::sanitize_feed;
