//! OAuth sign-in redirect.
//!
//! # Responsibilities
//! - Ask the backend for an authorization URL
//! - Hand the URL to a [`Navigator`] (browser, console, ...)
//! - Hold a busy flag for the duration of the attempt
//! - Report failures through the caller's `on_error` callback, no retries

use reqwest::Client;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::config::schema::{AuthConfig, BackendConfig};

/// Errors while starting a sign-in.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("sign-in endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid authorization URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("navigation failed: {0}")]
    Navigation(String),
}

/// Performs the full-page navigation to the authorization URL.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &Url) -> Result<(), AuthError>;
}

/// Prints the URL for the user to open.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, url: &Url) -> Result<(), AuthError> {
        println!("Open this URL to sign in:\n{}", url);
        Ok(())
    }
}

/// Shared "request in flight" flag for the UI.
#[derive(Debug, Default, Clone)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the flag unless already set. The flag clears when the guard drops.
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag: self.clone() })
    }
}

/// Clears the busy flag on drop.
#[derive(Debug)]
pub struct BusyGuard {
    flag: BusyFlag,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.0.store(false, Ordering::Release);
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AuthUrlResponse {
    Object {
        #[serde(alias = "authUrl")]
        url: String,
    },
    Bare(String),
}

/// Parse the endpoint body into an absolute `http(s)` URL.
pub fn parse_authorization_url(body: &str) -> Result<Url, AuthError> {
    let raw = match serde_json::from_str::<AuthUrlResponse>(body)
        .map_err(|e| AuthError::Decode(e.to_string()))?
    {
        AuthUrlResponse::Object { url } | AuthUrlResponse::Bare(url) => url,
    };
    let url = Url::parse(&raw).map_err(|e| AuthError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AuthError::InvalidUrl {
            reason: format!("scheme '{}' is not http or https", url.scheme()),
            url: raw,
        });
    }
    Ok(url)
}

/// Sign-in button logic.
pub struct SignIn<N> {
    http: Client,
    endpoint: String,
    navigator: N,
    busy: BusyFlag,
}

impl<N: Navigator> SignIn<N> {
    pub fn new(base_url: &str, oauth_url_path: &str, navigator: N) -> Self {
        Self {
            http: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), oauth_url_path),
            navigator,
            busy: BusyFlag::default(),
        }
    }

    pub fn from_config(backend: &BackendConfig, auth: &AuthConfig, navigator: N) -> Self {
        Self::new(&backend.base_url, &auth.oauth_url_path, navigator)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Handle for observing the busy state.
    pub fn busy(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// `GET` the authorization URL from the backend.
    pub async fn request_authorization_url(&self) -> Result<Url, AuthError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_authorization_url(&body)
    }

    /// Fetch the URL and navigate to it.
    ///
    /// Returns `true` when navigation happened. Failures go to `on_error`.
    /// A call made while another is in flight does nothing and returns `false`.
    pub async fn sign_in<F>(&self, on_error: F) -> bool
    where
        F: FnOnce(String),
    {
        let Some(_guard) = self.busy.try_acquire() else {
            tracing::debug!("Sign-in already in progress");
            return false;
        };

        let result = match self.request_authorization_url().await {
            Ok(url) => {
                tracing::info!(host = url.host_str().unwrap_or("-"), "Redirecting to sign-in provider");
                self.navigator.navigate(&url)
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "Sign-in failed");
                on_error(e.to_string());
                false
            }
        }
    }
}
