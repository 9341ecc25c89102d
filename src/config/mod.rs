//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.tutorlink.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `TUTORLINK_API_URL`, `TUTORLINK_TOKEN`, ...
//! 4. **Command-line arguments** – `--api-url`/`-a`, `--query`/`-q`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://tutors.example.com/api"
//! query = "subject=maths&mode=online"
//! page_size = 20
//! cache_ttl_seconds = 120
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::browse::BrowseFilter;
use crate::marketplace::error::ClientError;
use crate::marketplace::gateway::{GatewaySettings, RetryPolicy};
use crate::marketplace::token::AccessToken;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 15;
const DEFAULT_RETRY_ATTEMPTS: u32 = 2;
const DEFAULT_RETRY_BACKOFF_MILLIS: u64 = 250;
const DEFAULT_CACHE_TTL_SECONDS: u64 = 60;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Page through the tutor directory.
    Browse,
    /// Show one tutor's profile.
    TutorDetail,
    /// List published testimonials.
    Testimonials,
    /// Show the account behind the configured token.
    Session,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use tutorlink::TutorlinkConfig;
///
/// let config = TutorlinkConfig::load().expect("failed to load configuration");
/// let filter = config.browse_filter().expect("query should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TUTORLINK",
    discovery(
        dotfile_name = ".tutorlink.toml",
        config_file_name = "tutorlink.toml",
        app_name = "tutorlink"
    )
)]
pub struct TutorlinkConfig {
    /// Root of the marketplace REST API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-a <URL>`
    /// - Environment: `TUTORLINK_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_url: String,

    /// Access token for authenticated calls.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `TUTORLINK_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Saved browse filter as a query string, e.g. `subject=maths&page=2`.
    ///
    /// Can be provided via:
    /// - CLI: `--query <QUERY>` or `-q <QUERY>`
    /// - Environment: `TUTORLINK_QUERY`
    /// - Config file: `query = "..."`
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Page to show, overriding any page in `query`.
    #[ortho_config(cli_short = 'p')]
    pub page: Option<u32>,

    /// Tutors per page, overriding any limit in `query`.
    #[ortho_config()]
    pub page_size: Option<u32>,

    /// Show a single tutor's profile instead of browsing.
    ///
    /// Can be provided via:
    /// - CLI: `--tutor-id <ID>` or `-i <ID>`
    /// - Environment: `TUTORLINK_TUTOR_ID`
    /// - Config file: `tutor_id = "..."`
    #[ortho_config(cli_short = 'i')]
    pub tutor_id: Option<String>,

    /// List testimonials instead of browsing.
    ///
    /// Note: `TUTORLINK_TESTIMONIALS` is not read because `ortho_config` does
    /// not load boolean values from the environment.
    #[ortho_config()]
    pub testimonials: bool,

    /// Show the signed-in account for `token` instead of browsing.
    ///
    /// Like `testimonials`, this is only read from the CLI and config files.
    #[ortho_config()]
    pub whoami: bool,

    /// Per-request timeout, in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Extra attempts for idempotent requests that fail in transport.
    #[ortho_config()]
    pub retry_attempts: u32,

    /// Base delay between retries, in milliseconds; grows linearly.
    #[ortho_config()]
    pub retry_backoff_millis: u64,

    /// How long listings and profiles are cached, in seconds. `0` disables
    /// the cache.
    #[ortho_config()]
    pub cache_ttl_seconds: u64,

    /// Writes telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for TutorlinkConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            token: None,
            query: None,
            page: None,
            page_size: None,
            tutor_id: None,
            testimonials: false,
            whoami: false,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_backoff_millis: DEFAULT_RETRY_BACKOFF_MILLIS,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            telemetry: false,
        }
    }
}

impl TutorlinkConfig {
    /// Returns the configured access token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingToken`] when no token is configured or
    /// the configured value is blank.
    pub fn resolve_token(&self) -> Result<AccessToken, ClientError> {
        self.token
            .as_deref()
            .ok_or(ClientError::MissingToken)
            .and_then(AccessToken::new)
    }

    /// Returns the tutor id or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when no id is configured.
    pub fn require_tutor_id(&self) -> Result<&str, ClientError> {
        self.tutor_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ClientError::Configuration {
                message: "tutor id is required (use --tutor-id or -i)".to_owned(),
            })
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// A tutor id wins over the testimonials flag, which wins over
    /// `whoami`; browsing is the default.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tutor_id.is_some() {
            OperationMode::TutorDetail
        } else if self.testimonials {
            OperationMode::Testimonials
        } else if self.whoami {
            OperationMode::Session
        } else {
            OperationMode::Browse
        }
    }

    /// Builds the browse filter from `query`, then applies `page` and
    /// `page_size` on top.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidFilter`] when the query is malformed or
    /// the resulting filter is inconsistent.
    pub fn browse_filter(&self) -> Result<BrowseFilter, ClientError> {
        let mut filter = self
            .query
            .as_deref()
            .map_or_else(|| Ok(BrowseFilter::default()), BrowseFilter::deserialize)?;
        if let Some(page) = self.page {
            filter.page = Some(page);
        }
        if let Some(limit) = self.page_size {
            filter.limit = Some(limit);
        }
        filter.validate()?;
        Ok(filter)
    }

    /// Connection settings for the HTTP gateway.
    #[must_use]
    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings::new(
            self.api_url.clone(),
            Duration::from_secs(self.request_timeout_seconds),
        )
        .with_retry(RetryPolicy::new(
            self.retry_attempts,
            Duration::from_millis(self.retry_backoff_millis),
        ))
    }

    /// Lifetime of cached listings and profiles.
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

#[cfg(test)]
mod tests;
