use thiserror::Error;

/// Errors raised while converting an amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The quoted rate is zero, negative or missing.
    #[error("Rate not available.")]
    RateUnavailable,

    /// The amount text was empty or not a finite number.
    #[error("{0}")]
    InvalidAmount(String),
}
