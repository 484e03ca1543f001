//! Verification API request/response shapes and errors.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::config::schema::VerificationDataConfig;

/// `GET /verification/config` response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationConfig {
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl VerificationConfig {
    /// Contract address, treating an empty string as absent.
    pub fn contract_address(&self) -> Option<&str> {
        self.contract_address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

/// `GET /verification/status/{address}` response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatus {
    pub is_verified: bool,
    /// Unix seconds.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub verification_timestamp: Option<u64>,
}

/// Identity document attached to a simulated callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationData {
    pub name: String,
    pub nationality: String,
    pub age: u32,
    pub document_type: String,
}

impl From<&VerificationDataConfig> for VerificationData {
    fn from(config: &VerificationDataConfig) -> Self {
        Self {
            name: config.name.clone(),
            nationality: config.nationality.clone(),
            age: config.age,
            document_type: config.document_type.clone(),
        }
    }
}

/// `POST /verification/simulate-callback` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateCallbackRequest {
    pub user_address: String,
    pub verification_data: VerificationData,
}

/// `POST /verification/simulate-callback` response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateCallbackResponse {
    pub success: bool,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Errors from the verification backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// Request never produced a response (connect, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// Backend answered with a non-success status.
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Backend has no verification contract configured.
    #[error("backend has no verification contract address configured")]
    MissingContractAddress,

    /// Backend reported the simulated callback as failed.
    #[error("{0}")]
    Rejected(String),
}

impl VerificationError {
    /// No response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, VerificationError::Transport(_))
    }

    /// Whether the failure points at a missing signer key on the backend.
    pub fn mentions_private_key(&self) -> bool {
        self.to_string().to_lowercase().contains("private key")
    }
}

/// Result type for verification operations.
pub type VerificationResult<T> = Result<T, VerificationError>;

/// Accepts a JSON number, a numeric string, or null.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
