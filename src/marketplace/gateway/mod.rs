//! Gateways for talking to the marketplace REST API.
//!
//! Each trait covers one slice of the backend so views depend only on what
//! they call. [`HttpMarketplaceGateway`] implements all of them over reqwest;
//! [`CachingTutorGateway`] wraps any [`TutorGateway`] with a short-lived read
//! cache. Tokens are passed per call; gateways hold no session state.

mod caching;
mod client;
mod error_mapping;
mod http;
mod retry;

pub use caching::CachingTutorGateway;
pub use client::GatewaySettings;
pub use http::HttpMarketplaceGateway;
pub use retry::RetryPolicy;

use async_trait::async_trait;

use crate::browse::BrowseFilter;
use crate::marketplace::error::ClientError;
use crate::marketplace::models::{
    AuthSession, Credentials, NewTestimonial, NewTutorRequest, Paginated, RatingSummary,
    SignupRequest, Testimonial, TutorProfile, TutorProfileDraft, TutorRequest, UserAccount,
};
use crate::marketplace::token::AccessToken;
use crate::rating::RatingSubmission;

/// Gateway for account authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a session.
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ClientError>;

    /// Create an account and sign in.
    async fn signup(&self, request: &SignupRequest) -> Result<AuthSession, ClientError>;

    /// Fetch the account the token belongs to.
    async fn current_user(&self, token: &AccessToken) -> Result<UserAccount, ClientError>;
}

/// Gateway for tutor listings and profile management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TutorGateway: Send + Sync {
    /// List tutors matching the filter, one page at a time.
    async fn list_tutors(
        &self,
        filter: &BrowseFilter,
    ) -> Result<Paginated<TutorProfile>, ClientError>;

    /// Fetch a single tutor profile.
    async fn tutor_profile(&self, tutor_id: &str) -> Result<TutorProfile, ClientError>;

    /// Fetch the caller's own profile, `None` when they have not created one.
    async fn own_profile(&self, token: &AccessToken) -> Result<Option<TutorProfile>, ClientError>;

    /// Publish a new profile for the caller.
    async fn create_profile(
        &self,
        token: &AccessToken,
        draft: &TutorProfileDraft,
    ) -> Result<TutorProfile, ClientError>;

    /// Replace the editable fields of an existing profile.
    async fn update_profile(
        &self,
        token: &AccessToken,
        tutor_id: &str,
        draft: &TutorProfileDraft,
    ) -> Result<TutorProfile, ClientError>;

    /// Remove a profile.
    async fn delete_profile(&self, token: &AccessToken, tutor_id: &str) -> Result<(), ClientError>;
}

/// Gateway for student-to-tutor contact requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TutorRequestGateway: Send + Sync {
    /// Send a contact request to a tutor.
    async fn send_request(
        &self,
        token: &AccessToken,
        request: &NewTutorRequest,
    ) -> Result<TutorRequest, ClientError>;

    /// List requests visible to the caller.
    async fn list_requests(
        &self,
        token: &AccessToken,
        page: u32,
        limit: u32,
    ) -> Result<Paginated<TutorRequest>, ClientError>;
}

/// Gateway for ratings and testimonials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackGateway: Send + Sync {
    /// Rate a tutor and receive the updated aggregate.
    async fn rate_tutor(
        &self,
        token: &AccessToken,
        tutor_id: &str,
        rating: &RatingSubmission,
    ) -> Result<RatingSummary, ClientError>;

    /// List published testimonials.
    async fn testimonials(&self) -> Result<Vec<Testimonial>, ClientError>;

    /// Publish a testimonial.
    async fn post_testimonial(
        &self,
        token: &AccessToken,
        testimonial: &NewTestimonial,
    ) -> Result<Testimonial, ClientError>;
}
