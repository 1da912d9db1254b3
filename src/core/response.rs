//! Decoded payload of the rates endpoint

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

pub type Rates = HashMap<String, f64>;

// `null` decodes the same as an absent key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RateResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub base: String,
    /// Date the rates were published, which may predate the requested one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rates: Rates,
}

impl RateResponse {
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Body the API sends alongside a 4xx status, e.g. `{"error": "Invalid base"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_sample_body() {
        let body = br#"{
            "base": "EUR",
            "date": "2016-06-09",
            "rates": {"USD": 1.1375, "GBP": 0.78355, "JPY": 121.62}
        }"#;

        let response = RateResponse::from_json(body).unwrap();
        assert_eq!(response.base, "EUR");
        assert_eq!(response.date, "2016-06-09");
        assert_eq!(response.rates.len(), 3);
        assert!((response.rates["USD"] - 1.1375).abs() < 1e-9);
        assert!((response.rates["GBP"] - 0.78355).abs() < 1e-9);
        assert!((response.rates["JPY"] - 121.62).abs() < 1e-9);
    }

    #[test]
    fn test_missing_rates_decode_as_empty() {
        let response = RateResponse::from_json(br#"{"base": "USD", "date": "2016-06-09"}"#).unwrap();
        assert_eq!(response.base, "USD");
        assert!(response.rates.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let response =
            RateResponse::from_json(br#"{"base": "EUR", "date": "2016-06-09", "rates": null}"#)
                .unwrap();
        assert_eq!(response.base, "EUR");
        assert_eq!(response.date, "2016-06-09");
        assert!(response.rates.is_empty());

        let response =
            RateResponse::from_json(br#"{"base": null, "date": null, "rates": {"USD": 1.1}}"#)
                .unwrap();
        assert!(response.base.is_empty());
        assert!(response.date.is_empty());
        assert_eq!(response.rates.len(), 1);
        assert!((response.rates["USD"] - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = br#"{"success": true, "timestamp": 1465430400, "rates": {"CHF": 1.0942}}"#;
        let response = RateResponse::from_json(body).unwrap();
        assert_eq!(response.rates.len(), 1);
        assert!(response.base.is_empty());
    }

    #[test]
    fn test_malformed_bodies_are_rejected() {
        let bodies: [&[u8]; 6] = [
            b"",
            b"not json",
            br#"{"rates": {"USD": 1.13"#,
            br#"{"rates": ["USD", 1.13]}"#,
            br#"{"rates": {"USD": "1.13"}}"#,
            b"42",
        ];
        for body in bodies {
            assert!(
                RateResponse::from_json(body).is_err(),
                "expected {:?} to fail",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_api_error_body() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error": "Invalid base"}"#).unwrap();
        assert_eq!(body.error, "Invalid base");
    }
}
