//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`browse`]: Page through the tutor directory
//! - [`tutor_detail`]: Show a single tutor profile
//! - [`testimonials`]: List published testimonials
//! - [`session`]: Show the account behind the configured token
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use tutorlink::marketplace::HttpMarketplaceGateway;
use tutorlink::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use tutorlink::{CachingTutorGateway, ClientError, TutorlinkConfig};

pub mod browse;
pub mod output;
pub mod session;
pub mod testimonials;
pub mod tutor_detail;

#[cfg(test)]
pub mod test_utils;

/// Selects the telemetry sink requested by `--telemetry`.
pub fn telemetry_sink(config: &TutorlinkConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}

/// Builds the HTTP gateway described by `config`.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] or [`ClientError::Configuration`] when
/// the API URL or HTTP client settings are unusable.
pub fn build_http_gateway(
    config: &TutorlinkConfig,
    telemetry: Arc<dyn TelemetrySink>,
) -> Result<HttpMarketplaceGateway, ClientError> {
    let gateway = HttpMarketplaceGateway::new(&config.gateway_settings())?;
    Ok(gateway.with_telemetry(telemetry))
}

/// Builds the cached tutor gateway described by `config`.
///
/// # Errors
///
/// Propagates failures from [`build_http_gateway`].
pub fn build_tutor_gateway(
    config: &TutorlinkConfig,
    telemetry: Arc<dyn TelemetrySink>,
) -> Result<CachingTutorGateway<HttpMarketplaceGateway>, ClientError> {
    let http = build_http_gateway(config, telemetry)?;
    Ok(CachingTutorGateway::new(http, config.cache_ttl()))
}
