//! Core error types for fxfeed.

use fxfeed_feed::FetchError;
use thiserror::Error;

use crate::fx::ConversionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for rate selection and conversion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to refresh rates: {0}")]
    Fetch(#[from] FetchError),

    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("No currency details available for '{0}'")]
    CurrencyNotFound(String),
}

impl Error {
    /// Text suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            Error::Fetch(e) => e.user_message().to_string(),
            Error::Conversion(e) => e.to_string(),
            Error::CurrencyNotFound(_) => "No currency details available.".to_string(),
        }
    }
}
