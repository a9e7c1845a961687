use super::fx_errors::ConversionError;

/// Reads a user-entered amount.
///
/// The text is trimmed first. Empty input and anything that is not a finite
/// number are rejected with [`ConversionError::InvalidAmount`].
pub fn parse_amount(text: &str) -> Result<f64, ConversionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConversionError::InvalidAmount("Enter an amount".to_string()));
    }

    match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ConversionError::InvalidAmount(
            "Enter a valid number".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_trimmed_amount() {
        assert_eq!(parse_amount("  100 ").unwrap(), 100.0);
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
    }

    #[test]
    fn test_empty_amount() {
        assert_eq!(
            parse_amount("   ").unwrap_err(),
            ConversionError::InvalidAmount("Enter an amount".to_string())
        );
    }

    #[test]
    fn test_non_numeric_amount() {
        assert_eq!(
            parse_amount("12,50").unwrap_err(),
            ConversionError::InvalidAmount("Enter a valid number".to_string())
        );
    }

    #[test]
    fn test_non_finite_amount() {
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("1e400").is_err());
    }
}
