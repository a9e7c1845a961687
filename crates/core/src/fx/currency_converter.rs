use fxfeed_feed::{RateRecord, BASE_CURRENCY};
use serde::{Deserialize, Serialize};

use super::amount::parse_amount;
use super::fx_errors::ConversionError;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, RATE_DECIMAL_PRECISION};

/// Which way an amount is converted relative to the feed's base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConversionDirection {
    /// Base amount in, target amount out: `amount * rate`.
    #[default]
    BaseToTarget,
    /// Target amount in, base amount out: `amount / rate`.
    TargetToBase,
}

/// Result of a conversion: the unrounded value and its display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub value: f64,
    pub display: String,
}

/// Converts `amount` with a rate quoted as target units per one base unit.
///
/// A rate that is not strictly positive (or not finite) is rejected before any
/// arithmetic happens. The returned value is not rounded.
pub fn convert_amount(
    amount: f64,
    rate: f64,
    direction: ConversionDirection,
) -> Result<f64, ConversionError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ConversionError::RateUnavailable);
    }
    if !amount.is_finite() {
        return Err(ConversionError::InvalidAmount(
            "Enter a valid number".to_string(),
        ));
    }

    Ok(match direction {
        ConversionDirection::BaseToTarget => amount * rate,
        ConversionDirection::TargetToBase => amount / rate,
    })
}

/// Converter bound to one quoted currency against the base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyConverter {
    target_code: String,
    currency_name: String,
    rate: f64,
}

impl CurrencyConverter {
    pub fn new(target_code: impl Into<String>, currency_name: impl Into<String>, rate: f64) -> Self {
        Self {
            target_code: target_code.into(),
            currency_name: currency_name.into(),
            rate,
        }
    }

    /// Builds a converter for a parsed record.
    ///
    /// Returns `None` when the record has no target code, since such a row
    /// cannot be labelled. A missing name becomes an empty string and a missing
    /// rate reads as `0.0`, which later fails with `RateUnavailable`.
    pub fn from_record(record: &RateRecord) -> Option<Self> {
        let code = record.target_code()?;
        Some(Self::new(
            code,
            record.currency_name().unwrap_or_default(),
            record.rate(),
        ))
    }

    pub fn target_code(&self) -> &str {
        &self.target_code
    }

    pub fn currency_name(&self) -> &str {
        &self.currency_name
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Header text, e.g. `"GBP ⇄ AED (United Arab Emirates Dirham)"`.
    pub fn pair_label(&self) -> String {
        format!(
            "{} ⇄ {} ({})",
            BASE_CURRENCY, self.target_code, self.currency_name
        )
    }

    /// Rate line, e.g. `"1 GBP = 4.8074 AED"`.
    pub fn rate_summary(&self) -> String {
        format!(
            "1 {} = {:.prec$} {}",
            BASE_CURRENCY,
            self.rate,
            self.target_code,
            prec = RATE_DECIMAL_PRECISION
        )
    }

    /// Converts a numeric amount and formats both sides to two decimals.
    pub fn convert(
        &self,
        amount: f64,
        direction: ConversionDirection,
    ) -> Result<Conversion, ConversionError> {
        let value = convert_amount(amount, self.rate, direction)?;

        let (from_code, to_code) = match direction {
            ConversionDirection::BaseToTarget => (BASE_CURRENCY, self.target_code.as_str()),
            ConversionDirection::TargetToBase => (self.target_code.as_str(), BASE_CURRENCY),
        };
        let display = format!(
            "{} {:.prec$} = {} {:.prec$}",
            from_code,
            amount,
            to_code,
            value,
            prec = DISPLAY_DECIMAL_PRECISION
        );

        Ok(Conversion { value, display })
    }

    /// Parses user-entered text, then converts it.
    ///
    /// Input problems are reported before the rate is looked at.
    pub fn convert_text(
        &self,
        amount_text: &str,
        direction: ConversionDirection,
    ) -> Result<Conversion, ConversionError> {
        let amount = parse_amount(amount_text)?;
        self.convert(amount, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aed() -> CurrencyConverter {
        CurrencyConverter::new("AED", "United Arab Emirates Dirham", 4.8074)
    }

    #[test]
    fn test_base_to_target() {
        let conversion = aed()
            .convert(100.0, ConversionDirection::BaseToTarget)
            .unwrap();
        assert!((conversion.value - 480.74).abs() < 1e-9);
        assert_eq!(conversion.display, "GBP 100.00 = AED 480.74");
    }

    #[test]
    fn test_target_to_base() {
        let conversion = aed()
            .convert(100.0, ConversionDirection::TargetToBase)
            .unwrap();
        assert!((conversion.value - 20.801264716894786).abs() < 1e-9);
        assert_eq!(conversion.display, "AED 100.00 = GBP 20.80");
    }

    #[test]
    fn test_value_is_not_rounded() {
        let value = convert_amount(1.0, 3.0, ConversionDirection::TargetToBase).unwrap();
        assert_eq!(value, 1.0 / 3.0);
    }

    #[test]
    fn test_zero_rate_is_unavailable_both_ways() {
        for direction in [
            ConversionDirection::BaseToTarget,
            ConversionDirection::TargetToBase,
        ] {
            assert_eq!(
                convert_amount(100.0, 0.0, direction),
                Err(ConversionError::RateUnavailable)
            );
        }
    }

    #[test]
    fn test_negative_and_nan_rates_are_unavailable() {
        assert_eq!(
            convert_amount(100.0, -4.8, ConversionDirection::BaseToTarget),
            Err(ConversionError::RateUnavailable)
        );
        assert_eq!(
            convert_amount(100.0, f64::NAN, ConversionDirection::BaseToTarget),
            Err(ConversionError::RateUnavailable)
        );
    }

    #[test]
    fn test_non_finite_amount_is_rejected() {
        assert!(matches!(
            convert_amount(f64::INFINITY, 4.8, ConversionDirection::BaseToTarget),
            Err(ConversionError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_convert_text_checks_amount_before_rate() {
        let converter = CurrencyConverter::new("XYZ", "Unquoted", 0.0);
        assert_eq!(
            converter
                .convert_text("", ConversionDirection::BaseToTarget)
                .unwrap_err(),
            ConversionError::InvalidAmount("Enter an amount".to_string())
        );
        assert_eq!(
            converter
                .convert_text("10", ConversionDirection::BaseToTarget)
                .unwrap_err(),
            ConversionError::RateUnavailable
        );
    }

    #[test]
    fn test_labels() {
        let converter = aed();
        assert_eq!(
            converter.pair_label(),
            "GBP ⇄ AED (United Arab Emirates Dirham)"
        );
        assert_eq!(converter.rate_summary(), "1 GBP = 4.8074 AED");
    }

    #[test]
    fn test_from_record_requires_code() {
        let record = RateRecord::builder()
            .currency_name("Bitcoin")
            .rate(0.00002)
            .build();
        assert_eq!(CurrencyConverter::from_record(&record), None);

        let record = RateRecord::builder().target_code("JPY").build();
        let converter = CurrencyConverter::from_record(&record).unwrap();
        assert_eq!(converter.currency_name(), "");
        assert_eq!(
            converter.convert(1.0, ConversionDirection::BaseToTarget),
            Err(ConversionError::RateUnavailable)
        );
    }
}
