use anyhow::Result;
use fxfeed_core::rates::{RatesService, RatesServiceTrait};

use crate::cli::RatesArgs;
use crate::output::print_rates;

pub async fn execute(service: &RatesService, args: RatesArgs, json: bool) -> Result<()> {
    let snapshot = service.refresh().await?;

    let (heading, rates) = if args.main {
        ("Main currencies".to_string(), snapshot.main_currencies())
    } else if let Some(query) = args.search.as_deref() {
        let matches = snapshot.search(query);
        if matches.is_empty() && !json {
            println!("No currencies match that search.");
            return Ok(());
        }
        (format!("Currencies matching '{}'", query.trim()), matches)
    } else {
        ("All currencies".to_string(), snapshot.search(""))
    };

    print_rates(&heading, &rates, json)?;
    if !json {
        println!("{}", snapshot.summary());
    }
    Ok(())
}
