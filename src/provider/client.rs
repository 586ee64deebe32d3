// provider/client.rs
use crate::provider::{Offer, ProviderError};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const RPC_NAME: &str = "get_latest_rates_with_fallback";
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Blocking client for the hosted rate backend's single RPC.
///
/// Cheap to clone; shared read-only across server workers.
#[derive(Debug, Clone)]
pub struct RateProvider {
    client: Client,
    rpc_url: Url,
    api_key: String,
}

impl RateProvider {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let rpc_url = Url::parse(base_url)
            .and_then(|u| u.join(&format!("/rest/v1/rpc/{RPC_NAME}")))
            .map_err(|e| ProviderError::Config(format!("bad provider URL: {e}")))?;

        Ok(Self {
            client,
            rpc_url,
            api_key: api_key.to_string(),
        })
    }

    /// Fetch the latest offer batch. `include_sample` controls whether the
    /// backend substitutes placeholder rows when no live data exists.
    ///
    /// A `null` or empty body is a valid "no rows" result, not an error.
    pub fn fetch_latest(&self, include_sample: bool) -> Result<Vec<Offer>, ProviderError> {
        let resp = self
            .client
            .post(self.rpc_url.clone())
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({ "include_sample": include_sample }))
            .send()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::Auth(format!("HTTP {status}: {text}")));
        }
        if !status.is_success() {
            return Err(ProviderError::Query(format!("HTTP {status}: {text}")));
        }

        // PostgREST returns a literal `null` when the function yields no rows.
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Vec::new());
        }

        serde_json::from_str(trimmed).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
