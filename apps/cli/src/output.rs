//! Text and JSON rendering of rates and conversions.

use anyhow::Result;
use fxfeed_core::fx::{Conversion, CurrencyConverter};
use fxfeed_feed::RateRecord;
use serde_json::json;

pub fn print_rates(heading: &str, rates: &[&RateRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rates)?);
        return Ok(());
    }

    println!("{}", heading);
    for rate in rates {
        println!("  {:<48} {}", rate.to_string(), rate.rate_label());
    }
    Ok(())
}

pub fn print_conversion(
    converter: &CurrencyConverter,
    conversion: &Conversion,
    json: bool,
) -> Result<()> {
    if json {
        let body = json!({
            "targetCode": converter.target_code(),
            "currencyName": converter.currency_name(),
            "rate": converter.rate(),
            "value": conversion.value,
            "display": conversion.display,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", converter.pair_label());
    println!("{}", converter.rate_summary());
    println!("{}", conversion.display);
    Ok(())
}
