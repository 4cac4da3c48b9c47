//! Thin asynchronous client for the (external) ETHANI backend API.
//!
//! The demo build never requires the backend; the local engine replicates
//! its documented formula. This client exists for the Settings health check
//! and for non-demo builds that want the authoritative calculation.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::sleep;

use crate::domain::DEFAULT_API_BASE_URL;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const RETRY_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);
const USER_AGENT: &str = "ethani-dashboard/0.1.0";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CalculateRequest {
    pub supply: f64,
    pub demand: f64,
    pub base_price: f64,
    pub seasonal_factor: f64,
}

/// Price response as the backend documents it. Field names follow the
/// backend's wire format, not our domain types.
#[derive(Clone, Debug, Deserialize)]
pub struct RemoteQuote {
    pub region: String,
    pub base_price: f64,
    pub supply: f64,
    pub demand: f64,
    pub final_price: f64,
    pub reason: String,
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    /// Builds a client against a user-configured backend URL.
    pub fn with_base_url(base: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.url("health")?;
        let mut last_error: Option<ApiError> = None;
        for attempt in 1..=RETRY_ATTEMPTS {
            let result = self.get_health(url.clone()).await;
            match result {
                Ok(status) => return Ok(status),
                Err(error) => {
                    println!("Health check failed (attempt {attempt}/{RETRY_ATTEMPTS}): {error}");
                    last_error = Some(error);
                    if attempt < RETRY_ATTEMPTS {
                        sleep(RETRY_DELAY).await;
                    }
                }
            }
        }
        Err(last_error.unwrap_or_else(|| ApiError::Api("no attempts made".to_string())))
    }

    /// Asks the backend for its authoritative price calculation.
    pub async fn calculate(&self, request: &CalculateRequest) -> Result<RemoteQuote, ApiError> {
        let url = self.url("pricing/calculate")?;
        let mut last_error: Option<ApiError> = None;
        for attempt in 1..=RETRY_ATTEMPTS {
            let result = self.post_calculate(url.clone(), request).await;
            match result {
                Ok(quote) => return Ok(quote),
                Err(error) => {
                    println!(
                        "Price calculation failed (attempt {attempt}/{RETRY_ATTEMPTS}): {error}"
                    );
                    last_error = Some(error);
                    if attempt < RETRY_ATTEMPTS {
                        sleep(RETRY_DELAY).await;
                    }
                }
            }
        }
        Err(last_error.unwrap_or_else(|| ApiError::Api("no attempts made".to_string())))
    }

    async fn get_health(&self, url: Url) -> Result<HealthStatus, ApiError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<HealthStatus>().await?)
    }

    async fn post_calculate(
        &self,
        url: Url,
        request: &CalculateRequest,
    ) -> Result<RemoteQuote, ApiError> {
        let response = self.http.post(url).json(request).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api(format!("{status}: {body}")));
        }
        Ok(response.json::<RemoteQuote>().await?)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_localhost() {
        let client = ApiClient::new().expect("default client should build");
        let url = client.url("health").expect("join should succeed");
        assert_eq!(url.as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn calculate_endpoint_path() {
        let client = ApiClient::with_base_url("http://backend.example:9000").expect("client");
        let url = client.url("pricing/calculate").expect("join should succeed");
        assert_eq!(url.as_str(), "http://backend.example:9000/pricing/calculate");
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(ApiClient::with_base_url("not a url").is_err());
    }
}
