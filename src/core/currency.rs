//! Currency codes and conversion abstractions

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("Invalid currency code '{0}': expected three letters")]
    InvalidCode(String),
}

/// A three letter currency code such as `EUR`.
///
/// Only the shape of the code is checked. Whether the API actually publishes
/// rates for it is left to the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(Cow<'static, str>);

impl Currency {
    const fn from_static(code: &'static str) -> Self {
        Currency(Cow::Borrowed(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether fixer.io publishes reference rates for this code.
    pub fn is_published(&self) -> bool {
        PUBLISHED.contains(self)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidCode(s.to_string()));
        }
        Ok(Currency(Cow::Owned(code.to_ascii_uppercase())))
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> String {
        currency.0.into_owned()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

pub const AUD: Currency = Currency::from_static("AUD");
pub const BGN: Currency = Currency::from_static("BGN");
pub const BRL: Currency = Currency::from_static("BRL");
pub const CAD: Currency = Currency::from_static("CAD");
pub const CHF: Currency = Currency::from_static("CHF");
pub const CNY: Currency = Currency::from_static("CNY");
pub const CZK: Currency = Currency::from_static("CZK");
pub const DKK: Currency = Currency::from_static("DKK");
pub const EUR: Currency = Currency::from_static("EUR");
pub const GBP: Currency = Currency::from_static("GBP");
pub const HKD: Currency = Currency::from_static("HKD");
pub const HRK: Currency = Currency::from_static("HRK");
pub const HUF: Currency = Currency::from_static("HUF");
pub const IDR: Currency = Currency::from_static("IDR");
pub const ILS: Currency = Currency::from_static("ILS");
pub const INR: Currency = Currency::from_static("INR");
pub const JPY: Currency = Currency::from_static("JPY");
pub const KRW: Currency = Currency::from_static("KRW");
pub const MXN: Currency = Currency::from_static("MXN");
pub const MYR: Currency = Currency::from_static("MYR");
pub const NOK: Currency = Currency::from_static("NOK");
pub const NZD: Currency = Currency::from_static("NZD");
pub const PHP: Currency = Currency::from_static("PHP");
pub const PLN: Currency = Currency::from_static("PLN");
pub const RON: Currency = Currency::from_static("RON");
pub const RUB: Currency = Currency::from_static("RUB");
pub const SEK: Currency = Currency::from_static("SEK");
pub const SGD: Currency = Currency::from_static("SGD");
pub const THB: Currency = Currency::from_static("THB");
pub const TRY: Currency = Currency::from_static("TRY");
pub const USD: Currency = Currency::from_static("USD");
pub const ZAR: Currency = Currency::from_static("ZAR");

/// Currencies with ECB reference rates served by fixer.io.
pub const PUBLISHED: [Currency; 32] = [
    AUD, BGN, BRL, CAD, CHF, CNY, CZK, DKK, EUR, GBP, HKD, HRK, HUF, IDR, ILS, INR, JPY, KRW, MXN,
    MYR, NOK, NZD, PHP, PLN, RON, RUB, SEK, SGD, THB, TRY, USD, ZAR,
];

#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64>;
}
