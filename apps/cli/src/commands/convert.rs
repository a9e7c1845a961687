use anyhow::Result;
use fxfeed_core::fx::ConversionDirection;
use fxfeed_core::rates::{RatesService, RatesServiceTrait};

use crate::cli::ConvertArgs;
use crate::output::print_conversion;

pub async fn execute(service: &RatesService, args: ConvertArgs, json: bool) -> Result<()> {
    let snapshot = service.refresh().await?;
    let converter = snapshot.converter_for(&args.code)?;

    let direction = if args.to_gbp {
        ConversionDirection::TargetToBase
    } else {
        ConversionDirection::BaseToTarget
    };
    let conversion = converter
        .convert_text(&args.amount, direction)
        .map_err(fxfeed_core::Error::from)?;

    print_conversion(&converter, &conversion, json)
}
