//! Reqwest-backed implementation of every marketplace gateway.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::client::{build_http_client, parse_base_url};
use super::error_mapping::{extract_backend_message, map_http_error, map_transport_error};
use super::retry::RetryPolicy;
use super::{AuthGateway, FeedbackGateway, GatewaySettings, TutorGateway, TutorRequestGateway};
use crate::browse::BrowseFilter;
use crate::marketplace::error::ClientError;
use crate::marketplace::models::{
    ApiAuthResponse, ApiPage, AuthSession, Credentials, NewTestimonial, NewTutorRequest, Paginated,
    RatingSummary, SignupRequest, Testimonial, TutorProfile, TutorProfileDraft, TutorRequest,
    UserAccount,
};
use crate::marketplace::token::AccessToken;
use crate::rating::RatingSubmission;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// A single request, described independently of how many times it is sent.
struct ApiCall<'a> {
    method: Method,
    url: Url,
    token: Option<&'a AccessToken>,
    body: Option<serde_json::Value>,
    operation: &'static str,
}

impl<'a> ApiCall<'a> {
    const fn new(method: Method, url: Url, operation: &'static str) -> Self {
        Self {
            method,
            url,
            token: None,
            body: None,
            operation,
        }
    }

    const fn authorised(mut self, token: &'a AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body).map_err(|error| ClientError::Decode {
            message: format!(
                "{}: request body could not be encoded: {error}",
                self.operation
            ),
        })?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Gateway that talks to the marketplace REST API over HTTP.
///
/// Idempotent requests that fail in transport are retried according to the
/// configured [`RetryPolicy`]; every retry is logged and reported to the
/// telemetry sink.
pub struct HttpMarketplaceGateway {
    client: Client,
    base_url: Url,
    retry: RetryPolicy,
    telemetry: Arc<dyn TelemetrySink>,
}

impl HttpMarketplaceGateway {
    /// Builds a gateway for the API root in `settings`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` when the base URL is unusable, or
    /// `ClientError::Configuration` when the HTTP client cannot be built.
    pub fn new(settings: &GatewaySettings) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(settings)?,
            base_url: parse_base_url(&settings.base_url)?,
            retry: settings.retry,
            telemetry: Arc::new(NoopTelemetrySink),
        })
    }

    /// Reports retries to `telemetry` instead of dropping them.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl("API URL cannot carry a path".to_owned()))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, call: &ApiCall<'_>) -> Result<T, ClientError> {
        let mut retries = 0_u32;
        loop {
            match self.execute_once(call).await {
                Ok(value) => return Ok(value),
                Err(error) if self.retry.should_retry(&call.method, &error, retries) => {
                    retries = retries.saturating_add(1);
                    warn!(
                        operation = call.operation,
                        attempt = retries,
                        error = %error,
                        "retrying request after transport failure"
                    );
                    self.telemetry.record(TelemetryEvent::RequestRetried {
                        path: call.url.path().to_owned(),
                        attempt: retries,
                    });
                    tokio::time::sleep(self.retry.delay_for(retries)).await;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn execute_once<T: DeserializeOwned>(
        &self,
        call: &ApiCall<'_>,
    ) -> Result<T, ClientError> {
        debug!(method = %call.method, url = %call.url, "sending request");
        let mut request = self.client.request(call.method.clone(), call.url.clone());
        if let Some(token) = call.token {
            request = request.bearer_auth(token.value());
        }
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(call.operation, &error))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|error| map_transport_error(call.operation, &error))?;

        if !status.is_success() {
            return Err(map_http_error(
                call.operation,
                status,
                extract_backend_message(&text),
            ));
        }

        let payload = if text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };
        serde_json::from_str(payload).map_err(|error| ClientError::Decode {
            message: format!(
                "{} response deserialisation failed: {error}",
                call.operation
            ),
        })
    }

    async fn send_auth(
        &self,
        segment: &str,
        body: &impl Serialize,
        operation: &'static str,
    ) -> Result<AuthSession, ClientError> {
        let url = self.endpoint(&["auth", segment], &[])?;
        let call = ApiCall::new(Method::POST, url, operation).with_body(body)?;
        let response: ApiAuthResponse = self.execute(&call).await?;
        AuthSession::try_from(response)
    }
}

#[async_trait]
impl AuthGateway for HttpMarketplaceGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ClientError> {
        self.send_auth("login", credentials, "login").await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthSession, ClientError> {
        self.send_auth("signup", request, "signup").await
    }

    async fn current_user(&self, token: &AccessToken) -> Result<UserAccount, ClientError> {
        let url = self.endpoint(&["auth", "me"], &[])?;
        let call = ApiCall::new(Method::GET, url, "current user").authorised(token);
        self.execute(&call).await
    }
}

#[async_trait]
impl TutorGateway for HttpMarketplaceGateway {
    async fn list_tutors(
        &self,
        filter: &BrowseFilter,
    ) -> Result<Paginated<TutorProfile>, ClientError> {
        let url = self.endpoint(&["tutors"], &filter.query_pairs())?;
        let call = ApiCall::new(Method::GET, url, "list tutors");
        let page: ApiPage<TutorProfile> = self.execute(&call).await?;
        Ok(page.into_paginated(filter.limit_or_default()))
    }

    async fn tutor_profile(&self, tutor_id: &str) -> Result<TutorProfile, ClientError> {
        let url = self.endpoint(&["tutors", tutor_id], &[])?;
        self.execute(&ApiCall::new(Method::GET, url, "tutor profile"))
            .await
    }

    async fn own_profile(&self, token: &AccessToken) -> Result<Option<TutorProfile>, ClientError> {
        let url = self.endpoint(&["tutors", "me"], &[])?;
        let call = ApiCall::new(Method::GET, url, "own profile").authorised(token);
        match self.execute(&call).await {
            Ok(profile) => Ok(Some(profile)),
            Err(ClientError::NotFound { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }

    async fn create_profile(
        &self,
        token: &AccessToken,
        draft: &TutorProfileDraft,
    ) -> Result<TutorProfile, ClientError> {
        draft.validate()?;
        let url = self.endpoint(&["tutors"], &[])?;
        let call = ApiCall::new(Method::POST, url, "create profile")
            .authorised(token)
            .with_body(draft)?;
        self.execute(&call).await
    }

    async fn update_profile(
        &self,
        token: &AccessToken,
        tutor_id: &str,
        draft: &TutorProfileDraft,
    ) -> Result<TutorProfile, ClientError> {
        draft.validate()?;
        let url = self.endpoint(&["tutors", tutor_id], &[])?;
        let call = ApiCall::new(Method::PUT, url, "update profile")
            .authorised(token)
            .with_body(draft)?;
        self.execute(&call).await
    }

    async fn delete_profile(&self, token: &AccessToken, tutor_id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&["tutors", tutor_id], &[])?;
        let call = ApiCall::new(Method::DELETE, url, "delete profile").authorised(token);
        self.execute::<serde_json::Value>(&call).await.map(|_| ())
    }
}

#[async_trait]
impl TutorRequestGateway for HttpMarketplaceGateway {
    async fn send_request(
        &self,
        token: &AccessToken,
        request: &NewTutorRequest,
    ) -> Result<TutorRequest, ClientError> {
        request.validate()?;
        let url = self.endpoint(&["tutor-requests"], &[])?;
        let call = ApiCall::new(Method::POST, url, "send tutor request")
            .authorised(token)
            .with_body(request)?;
        self.execute(&call).await
    }

    async fn list_requests(
        &self,
        token: &AccessToken,
        page: u32,
        limit: u32,
    ) -> Result<Paginated<TutorRequest>, ClientError> {
        if page == 0 || limit == 0 {
            return Err(ClientError::InvalidPagination {
                message: format!("page ({page}) and limit ({limit}) must be at least 1"),
            });
        }
        let query = [("page", page.to_string()), ("limit", limit.to_string())];
        let url = self.endpoint(&["tutor-requests"], &query)?;
        let call = ApiCall::new(Method::GET, url, "list tutor requests").authorised(token);
        let envelope: ApiPage<TutorRequest> = self.execute(&call).await?;
        Ok(envelope.into_paginated(limit))
    }
}

#[async_trait]
impl FeedbackGateway for HttpMarketplaceGateway {
    async fn rate_tutor(
        &self,
        token: &AccessToken,
        tutor_id: &str,
        rating: &RatingSubmission,
    ) -> Result<RatingSummary, ClientError> {
        let url = self.endpoint(&["tutors", tutor_id, "ratings"], &[])?;
        let call = ApiCall::new(Method::POST, url, "rate tutor")
            .authorised(token)
            .with_body(rating)?;
        self.execute(&call).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, ClientError> {
        let url = self.endpoint(&["testimonials"], &[])?;
        self.execute(&ApiCall::new(Method::GET, url, "list testimonials"))
            .await
    }

    async fn post_testimonial(
        &self,
        token: &AccessToken,
        testimonial: &NewTestimonial,
    ) -> Result<Testimonial, ClientError> {
        testimonial.validate()?;
        let url = self.endpoint(&["testimonials"], &[])?;
        let call = ApiCall::new(Method::POST, url, "post testimonial")
            .authorised(token)
            .with_body(testimonial)?;
        self.execute(&call).await
    }
}
