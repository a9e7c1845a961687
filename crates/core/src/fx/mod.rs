//! FX (Foreign Exchange) module - conversion arithmetic and amount input.

mod amount;
pub mod currency_converter;
mod fx_errors;

pub use amount::parse_amount;
pub use currency_converter::{convert_amount, Conversion, ConversionDirection, CurrencyConverter};
pub use fx_errors::ConversionError;
