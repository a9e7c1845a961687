pub mod convert;
pub mod rates;
pub mod watch;
