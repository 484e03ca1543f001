//! HTTP client for the verification backend.
//!
//! # Responsibilities
//! - Call the config, status and simulate-callback endpoints
//! - Tag every call with a fresh request ID
//! - Map transport, status and decode failures to `VerificationError`

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

use crate::config::schema::BackendConfig;
use crate::observability::metrics::{record_backend_request, Outcome};
use crate::verification::types::{
    SimulateCallbackRequest, SimulateCallbackResponse, VerificationConfig, VerificationError,
    VerificationResult, VerificationStatus,
};

/// Header carrying the per-call correlation ID.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub const CONFIG_PATH: &str = "/verification/config";
pub const STATUS_PATH: &str = "/verification/status";
pub const SIMULATE_CALLBACK_PATH: &str = "/verification/simulate-callback";

/// Operations the smoke-test runner needs from the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationApi: Send + Sync {
    async fn get_config(&self) -> VerificationResult<VerificationConfig>;

    async fn get_status(&self, address: &str) -> VerificationResult<VerificationStatus>;

    async fn simulate_callback(
        &self,
        request: &SimulateCallbackRequest,
    ) -> VerificationResult<SimulateCallbackResponse>;
}

/// reqwest-backed implementation of [`VerificationApi`].
#[derive(Clone)]
pub struct VerificationClient {
    http: Client,
    base_url: String,
}

impl VerificationClient {
    /// Create a client. Without a timeout the reqwest defaults apply.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> VerificationResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| VerificationError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &BackendConfig) -> VerificationResult<Self> {
        Self::new(
            &config.base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        endpoint: &'static str,
        request: reqwest::RequestBuilder,
    ) -> VerificationResult<(reqwest::StatusCode, String)> {
        let request_id = Uuid::new_v4();
        let response: Response = request
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await
            .map_err(|e| {
                record_backend_request(endpoint, Outcome::TransportError);
                tracing::warn!(%request_id, endpoint, error = %e, "Backend request failed");
                VerificationError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            record_backend_request(endpoint, Outcome::TransportError);
            VerificationError::Transport(format!("failed to read response body: {}", e))
        })?;

        let outcome = if status.is_success() { Outcome::Success } else { Outcome::HttpError };
        record_backend_request(endpoint, outcome);
        tracing::debug!(%request_id, endpoint, status = status.as_u16(), "Backend responded");

        Ok((status, body))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
    ) -> VerificationResult<T> {
        let (status, body) = self.send(endpoint, self.http.get(self.url(path))).await?;
        if !status.is_success() {
            return Err(VerificationError::Status {
                status: status.as_u16(),
                body,
            });
        }
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> VerificationResult<T> {
    serde_json::from_str(body).map_err(|e| VerificationError::Decode(e.to_string()))
}

#[async_trait]
impl VerificationApi for VerificationClient {
    async fn get_config(&self) -> VerificationResult<VerificationConfig> {
        let (status, body) = self
            .send("config", self.http.get(self.url(CONFIG_PATH)))
            .await?;
        if status.is_success() {
            return decode(&body);
        }

        // An error page that is still JSON is read like any other config;
        // it normally lacks a contract address.
        match decode::<VerificationConfig>(&body) {
            Ok(config) => {
                tracing::warn!(status = status.as_u16(), "Config endpoint returned an error status");
                Ok(config)
            }
            Err(_) => Err(VerificationError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }

    async fn get_status(&self, address: &str) -> VerificationResult<VerificationStatus> {
        let path = format!("{}/{}", STATUS_PATH, address);
        self.get_json("status", &path).await
    }

    async fn simulate_callback(
        &self,
        request: &SimulateCallbackRequest,
    ) -> VerificationResult<SimulateCallbackResponse> {
        let builder = self.http.post(self.url(SIMULATE_CALLBACK_PATH)).json(request);
        let (status, body) = self.send("simulate_callback", builder).await?;

        // Failed simulations come back as 4xx/5xx with a regular response body.
        match decode::<SimulateCallbackResponse>(&body) {
            Ok(response) => Ok(response),
            Err(_) if !status.is_success() => Err(VerificationError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = VerificationClient::new("http://localhost:3001/api/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001/api");
        assert_eq!(client.url(CONFIG_PATH), "http://localhost:3001/api/verification/config");
    }

    #[test]
    fn test_from_config() {
        let config = BackendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: Some(3),
        };
        let client = VerificationClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) is not listening on loopback in test environments.
        let client = VerificationClient::new("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
        let err = client.get_config().await.unwrap_err();
        assert!(matches!(err, VerificationError::Transport(_)));
    }
}
