//! Views over a fetched rate list.
//!
//! All functions preserve feed order and borrow from the list they are given.

use fxfeed_feed::RateRecord;

use crate::constants::MAIN_CURRENCIES;

/// Records for the headline currencies (USD, EUR, JPY), in feed order.
///
/// Records without a target code are skipped.
pub fn main_currencies(rates: &[RateRecord]) -> Vec<&RateRecord> {
    rates
        .iter()
        .filter(|rate| {
            rate.target_code().is_some_and(|code| {
                MAIN_CURRENCIES
                    .iter()
                    .any(|main| main.eq_ignore_ascii_case(code))
            })
        })
        .collect()
}

/// Case-insensitive substring search over code and name.
///
/// An empty (or whitespace-only) query matches every record.
pub fn search_rates<'a>(rates: &'a [RateRecord], query: &str) -> Vec<&'a RateRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rates.iter().collect();
    }

    rates
        .iter()
        .filter(|rate| {
            let code = rate.target_code().unwrap_or_default().to_lowercase();
            let name = rate.currency_name().unwrap_or_default().to_lowercase();
            code.contains(&query) || name.contains(&query)
        })
        .collect()
}

/// First record whose code matches `code`, ignoring case.
pub fn find_rate<'a>(rates: &'a [RateRecord], code: &str) -> Option<&'a RateRecord> {
    let code = code.trim();
    rates.iter().find(|rate| {
        rate.target_code()
            .is_some_and(|target| target.eq_ignore_ascii_case(code))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: Option<&str>, name: &str, rate: f64) -> RateRecord {
        let builder = RateRecord::builder().currency_name(name).rate(rate);
        match code {
            Some(code) => builder.target_code(code).build(),
            None => builder.build(),
        }
    }

    fn sample() -> Vec<RateRecord> {
        vec![
            record(Some("AED"), "United Arab Emirates Dirham", 4.8074),
            record(Some("JPY"), "Japanese Yen", 189.7321),
            record(None, "Mystery Token", 1.0),
            record(Some("usd"), "US Dollar", 1.3478),
            record(Some("EUR"), "Euro", 1.1612),
        ]
    }

    #[test]
    fn test_main_currencies_keep_feed_order() {
        let rates = sample();
        let codes: Vec<_> = main_currencies(&rates)
            .iter()
            .map(|r| r.target_code().unwrap())
            .collect();
        assert_eq!(codes, vec!["JPY", "usd", "EUR"]);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let rates = sample();
        assert_eq!(search_rates(&rates, "   ").len(), rates.len());
    }

    #[test]
    fn test_search_matches_code_or_name() {
        let rates = sample();
        let by_code = search_rates(&rates, "Jp");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].target_code(), Some("JPY"));

        let by_name: Vec<_> = search_rates(&rates, " dollar ")
            .iter()
            .map(|r| r.target_code())
            .collect();
        assert_eq!(by_name, vec![Some("usd")]);

        let without_code = search_rates(&rates, "mystery");
        assert_eq!(without_code.len(), 1);
        assert_eq!(without_code[0].target_code(), None);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(search_rates(&sample(), "zzz").is_empty());
    }

    #[test]
    fn test_find_rate_ignores_case() {
        let rates = sample();
        assert_eq!(find_rate(&rates, "USD").unwrap().currency_name(), Some("US Dollar"));
        assert_eq!(find_rate(&rates, "aed").unwrap().target_code(), Some("AED"));
        assert!(find_rate(&rates, "GBP").is_none());
    }
}
