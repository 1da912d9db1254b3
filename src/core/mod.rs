//! Request building, decoding and shared abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod request;
pub mod response;

// Re-export main types for cleaner imports
pub use currency::{Currency, CurrencyRateProvider};
pub use error::FixerError;
pub use request::{Protocol, RatesRequest};
pub use response::{RateResponse, Rates};
