/*
[INPUT]:  Service mode (live/test), HTTP configuration, bearer tokens
[OUTPUT]: Configured reqwest client issuing normalized Litego API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::http::result::{normalize, ApiResult};
use crate::http::Result;

/// Base URLs for the Litego service
const LITEGO_MAINNET_URL: &str = "https://api.litego.io:9000";
const LITEGO_TESTNET_URL: &str = "https://sandbox.litego.io:9000";
const WS_LITEGO_MAINNET_URL: &str = "wss://api.litego.io:9000";
const WS_LITEGO_TESTNET_URL: &str = "wss://sandbox.litego.io:9000";

/// Default request timeout used by the remote API docs
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Service environment selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Production service (mainnet)
    Live,
    /// Sandbox service (testnet)
    Test,
}

impl Mode {
    /// REST base URL for this environment
    pub fn api_base_url(self) -> &'static str {
        match self {
            Mode::Live => LITEGO_MAINNET_URL,
            Mode::Test => LITEGO_TESTNET_URL,
        }
    }

    /// WebSocket base URL for this environment
    pub fn ws_base_url(self) -> &'static str {
        match self {
            Mode::Live => WS_LITEGO_MAINNET_URL,
            Mode::Test => WS_LITEGO_TESTNET_URL,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// Main HTTP client for the Litego API
#[derive(Debug, Clone)]
pub struct LitegoClient {
    http_client: Client,
    base_url: Url,
}

impl LitegoClient {
    /// Create a new client for the given environment with default configuration
    pub fn new(mode: Mode) -> Result<Self> {
        Self::with_config(mode, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(mode: Mode, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, mode.api_base_url())
    }

    /// Create a client pointed at an explicit base URL (tests use this
    /// to target a mock server)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Build full URL for an API endpoint
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for an unauthenticated endpoint
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder carrying a bearer token
    pub(crate) fn api_request_with_auth(
        &self,
        method: Method,
        endpoint: &str,
        token: &str,
    ) -> Result<RequestBuilder> {
        Ok(self.api_request(method, endpoint)?.bearer_auth(token))
    }

    /// Execute a request and normalize the response.
    ///
    /// Transport failures (connect, TLS, timeout) surface as `Err`; any
    /// response with a status code, success or not, becomes an `ApiResult`.
    pub(crate) async fn send<T>(&self, builder: RequestBuilder) -> Result<ApiResult<T>>
    where
        T: DeserializeOwned + Default,
    {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let raw = response.text().await?;

        debug!(status, bytes = raw.len(), "api response");

        Ok(normalize(status, &raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_base_urls() {
        assert_eq!(Mode::Live.api_base_url(), "https://api.litego.io:9000");
        assert_eq!(Mode::Test.api_base_url(), "https://sandbox.litego.io:9000");
        assert_eq!(Mode::Live.ws_base_url(), "wss://api.litego.io:9000");
        assert_eq!(Mode::Test.ws_base_url(), "wss://sandbox.litego.io:9000");
    }

    #[test]
    fn test_default_config_matches_api_docs() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_creation() {
        assert!(LitegoClient::new(Mode::Test).is_ok());
        assert!(LitegoClient::with_config(Mode::Live, ClientConfig::default()).is_ok());
    }
}
