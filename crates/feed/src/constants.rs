/// Base currency of every quote in the feed.
pub const BASE_CURRENCY: &str = "GBP";

/// Feed published by fx-exchange.com for GBP quotes.
pub const DEFAULT_FEED_URL: &str = "https://www.fx-exchange.com/gbp/rss.xml";

/// Start of the XML prolog; anything before it is transport noise.
pub const DOCUMENT_START_MARKER: &str = "<?";

/// Closing root element; anything after it is trailing noise.
pub const DOCUMENT_END_MARKER: &str = "</rss>";
