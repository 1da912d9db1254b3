//! Request configuration for the rates endpoint

use chrono::NaiveDate;
use std::fmt::Display;

use super::currency::{Currency, EUR};

pub const DEFAULT_HOST: &str = "api.fixer.io";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Https,
    Http,
}

impl Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
        })
    }
}

/// Parameters of a single rates request.
///
/// Every setter consumes the request and hands back the updated value, so a
/// configured request can be cloned and varied without affecting the original.
///
/// ```
/// use fixerio::core::currency::{EUR, GBP, USD};
/// use fixerio::core::request::RatesRequest;
///
/// let request = RatesRequest::new().base(USD).symbols([EUR, GBP]).secure(false);
/// assert_eq!(
///     request.url(),
///     "http://api.fixer.io/latest?base=USD&symbols=EUR,GBP"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatesRequest {
    host: String,
    base: Currency,
    protocol: Protocol,
    date: Option<NaiveDate>,
    symbols: Vec<Currency>,
}

impl Default for RatesRequest {
    fn default() -> Self {
        Self::for_host(DEFAULT_HOST)
    }
}

impl RatesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets a different API host, e.g. a mirror or a local mock server.
    pub fn for_host(host: impl Into<String>) -> Self {
        RatesRequest {
            host: host.into(),
            base: EUR,
            protocol: Protocol::Https,
            date: None,
            symbols: Vec::new(),
        }
    }

    pub fn base(mut self, currency: Currency) -> Self {
        self.base = currency;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.protocol = if secure {
            Protocol::Https
        } else {
            Protocol::Http
        };
        self
    }

    /// Replaces the symbols filter. An empty list removes the filter.
    pub fn symbols<I>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = Currency>,
    {
        self.symbols = currencies.into_iter().collect();
        self
    }

    /// Requests archived rates for `date` instead of the latest ones.
    pub fn historical(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn latest(mut self) -> Self {
        self.date = None;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_currency(&self) -> &Currency {
        &self.base
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn symbol_list(&self) -> &[Currency] {
        &self.symbols
    }

    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl Display for RatesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}/", self.protocol, self.host)?;
        match self.date {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d"))?,
            None => f.write_str("latest")?,
        }
        write!(f, "?base={}", self.base)?;

        if !self.symbols.is_empty() {
            let joined = self
                .symbols
                .iter()
                .map(Currency::as_str)
                .collect::<Vec<_>>()
                .join(",");
            write!(f, "&symbols={joined}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::{AUD, GBP, USD};

    fn june_9th() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 6, 9).unwrap()
    }

    #[test]
    fn test_default_parameters() {
        assert_eq!(
            RatesRequest::new().url(),
            "https://api.fixer.io/latest?base=EUR"
        );
    }

    #[test]
    fn test_unsecure() {
        let request = RatesRequest::new().secure(false);
        assert_eq!(request.url(), "http://api.fixer.io/latest?base=EUR");
        assert_eq!(request.protocol(), Protocol::Http);

        let request = request.secure(true);
        assert_eq!(request.url(), "https://api.fixer.io/latest?base=EUR");
    }

    #[test]
    fn test_base() {
        let request = RatesRequest::new().base(USD);
        assert_eq!(request.url(), "https://api.fixer.io/latest?base=USD");
    }

    #[test]
    fn test_symbols_keep_call_order() {
        let request = RatesRequest::new().base(GBP).symbols([EUR, USD, AUD]);
        assert_eq!(
            request.url(),
            "https://api.fixer.io/latest?base=GBP&symbols=EUR,USD,AUD"
        );
    }

    #[test]
    fn test_single_symbol() {
        let request = RatesRequest::new().base(GBP).symbols([EUR]);
        assert_eq!(
            request.url(),
            "https://api.fixer.io/latest?base=GBP&symbols=EUR"
        );
    }

    #[test]
    fn test_symbols_are_neither_sorted_nor_deduplicated() {
        let request = RatesRequest::new().symbols([USD, AUD, USD]);
        assert_eq!(
            request.url(),
            "https://api.fixer.io/latest?base=EUR&symbols=USD,AUD,USD"
        );
    }

    #[test]
    fn test_empty_symbols_clear_filter() {
        let request = RatesRequest::new().symbols([USD, GBP]).symbols(Vec::new());
        assert_eq!(request.url(), "https://api.fixer.io/latest?base=EUR");
        assert!(request.symbol_list().is_empty());

        // Clearing twice is the same as clearing once
        let request = request.symbols(std::iter::empty());
        assert_eq!(request.url(), "https://api.fixer.io/latest?base=EUR");
    }

    #[test]
    fn test_historical() {
        let request = RatesRequest::new().historical(june_9th());
        assert_eq!(request.url(), "https://api.fixer.io/2016-06-09?base=EUR");
        assert_eq!(request.date(), Some(june_9th()));
    }

    #[test]
    fn test_latest_clears_historical_date() {
        let request = RatesRequest::new().historical(june_9th()).latest();
        assert_eq!(request.url(), "https://api.fixer.io/latest?base=EUR");
    }

    #[test]
    fn test_all_parameters() {
        let request = RatesRequest::new()
            .base(USD)
            .symbols([EUR, GBP])
            .secure(false);
        assert_eq!(
            request.url(),
            "http://api.fixer.io/latest?base=USD&symbols=EUR,GBP"
        );
    }

    #[test]
    fn test_clones_are_independent() {
        let original = RatesRequest::new().base(USD);
        let variant = original.clone().symbols([GBP]).historical(june_9th());

        assert_eq!(original.url(), "https://api.fixer.io/latest?base=USD");
        assert_eq!(
            variant.url(),
            "https://api.fixer.io/2016-06-09?base=USD&symbols=GBP"
        );
    }

    #[test]
    fn test_custom_host() {
        let request = RatesRequest::for_host("127.0.0.1:8080").secure(false);
        assert_eq!(request.host(), "127.0.0.1:8080");
        assert_eq!(request.url(), "http://127.0.0.1:8080/latest?base=EUR");
    }
}
