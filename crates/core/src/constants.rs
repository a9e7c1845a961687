/// Codes shown in the "main currencies" selection, in display priority.
pub const MAIN_CURRENCIES: [&str; 3] = ["USD", "EUR", "JPY"];

/// Decimal places used when displaying converted amounts
pub const DISPLAY_DECIMAL_PRECISION: usize = 2;

/// Decimal places used when displaying a rate
pub const RATE_DECIMAL_PRECISION: usize = 4;
