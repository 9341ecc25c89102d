//! Reqwest client construction for gateway implementations.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::retry::RetryPolicy;
use crate::marketplace::error::ClientError;

/// Connection settings shared by every request a gateway makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    /// API root, e.g. `https://tutors.example.com/api`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry behaviour for transport failures.
    pub retry: RetryPolicy,
}

impl GatewaySettings {
    /// Creates settings with the default retry policy.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            retry: RetryPolicy::default(),
        }
    }

    /// Replaces the retry policy.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Parses the API root, rejecting URLs that cannot carry path segments.
///
/// # Errors
///
/// Returns `ClientError::InvalidUrl` when the URL does not parse or is not an
/// `http`/`https` URL.
pub(super) fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw.trim()).map_err(|error| ClientError::InvalidUrl(error.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl(format!(
            "unsupported scheme `{}`",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(
            "API URL must be hierarchical".to_owned(),
        ));
    }
    Ok(url)
}

/// Builds the HTTP client used for all marketplace calls.
///
/// # Errors
///
/// Returns `ClientError::Configuration` when reqwest cannot build a client
/// (for example when the TLS backend fails to initialise).
pub(super) fn build_http_client(settings: &GatewaySettings) -> Result<Client, ClientError> {
    Client::builder()
        .timeout(settings.timeout)
        .user_agent(concat!("tutorlink/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|error| ClientError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })
}
