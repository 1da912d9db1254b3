use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::currency::{Currency, CurrencyRateProvider};
use crate::core::error::FixerError;
use crate::core::request::RatesRequest;
use crate::core::response::{ApiErrorBody, RateResponse, Rates};

const USER_AGENT: &str = concat!("fixerio/", env!("CARGO_PKG_VERSION"));

/// Issues rates requests against fixer.io.
///
/// The underlying HTTP client keeps a connection pool, so one `FixerClient`
/// can serve any number of requests.
pub struct FixerClient {
    client: reqwest::Client,
    template: RatesRequest,
}

impl FixerClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client))
    }

    /// Gives up on any request that takes longer than `timeout` end to end.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        FixerClient {
            client,
            template: RatesRequest::new(),
        }
    }

    /// Sets the request [`CurrencyRateProvider::get_rate`] starts from. Its
    /// host, scheme and date are kept; base and symbols are replaced per pair.
    pub fn endpoint(mut self, template: RatesRequest) -> Self {
        self.template = template;
        self
    }

    pub fn template(&self) -> &RatesRequest {
        &self.template
    }

    /// Fetches the rates for `request`, dropping the base and date the API echoes back.
    pub async fn get_rates(&self, request: &RatesRequest) -> Result<Rates, FixerError> {
        self.get_response(request)
            .await
            .map(|response| response.rates)
    }

    #[instrument(name = "FixerRatesFetch", skip_all, fields(url = %request))]
    pub async fn get_response(&self, request: &RatesRequest) -> Result<RateResponse, FixerError> {
        let url = request.url();
        debug!("Requesting rates from {}", url);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| FixerError::Connection {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        debug!(%status, "Received fixer response");

        let body = response.bytes().await.map_err(|source| FixerError::Read {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            let reason = match serde_json::from_slice::<ApiErrorBody>(&body) {
                Ok(api_error) => format!("HTTP error: {status}: {}", api_error.error),
                Err(_) => format!("HTTP error: {status}"),
            };
            return Err(FixerError::Connection { url, reason });
        }

        let decoded =
            RateResponse::from_json(&body).map_err(|source| FixerError::Parse {
                url: url.clone(),
                source,
            })?;

        debug!(
            base = %decoded.base,
            date = %decoded.date,
            count = decoded.rates.len(),
            "Decoded rates"
        );
        Ok(decoded)
    }
}

#[async_trait]
impl CurrencyRateProvider for FixerClient {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        let from: Currency = from.parse()?;
        let to: Currency = to.parse()?;
        if from == to {
            return Ok(1.0);
        }

        let request = self
            .template
            .clone()
            .base(from.clone())
            .symbols([to.clone()]);

        let rates = self.get_rates(&request).await?;
        rates
            .get(to.as_str())
            .copied()
            .ok_or_else(|| anyhow!("No rate data found for currency pair: {from}{to}"))
    }
}
