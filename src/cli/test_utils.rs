//! Hand-written gateways shared by CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tutorlink::browse::BrowseFilter;
use tutorlink::marketplace::models::{
    AuthSession, Credentials, NewTestimonial, Paginated, RatingSummary, SignupRequest, Testimonial,
    TutorProfileDraft, UserAccount, UserRole,
};
use tutorlink::marketplace::{AuthGateway, FeedbackGateway};
use tutorlink::rating::RatingSubmission;
use tutorlink::{AccessToken, ClientError, TutorGateway, TutorProfile};

type Canned<T> = Arc<Mutex<Option<Result<T, ClientError>>>>;

/// Gateway that records the last filter and replays canned responses.
#[derive(Clone, Default)]
pub struct CapturingGateway {
    pub captured: Arc<Mutex<Option<BrowseFilter>>>,
    pub listing: Canned<Paginated<TutorProfile>>,
    pub profile: Canned<TutorProfile>,
    pub testimonials: Canned<Vec<Testimonial>>,
    pub user: Canned<UserAccount>,
    pub own_profile: Canned<Option<TutorProfile>>,
    pub presented_token: Arc<Mutex<Option<String>>>,
}

impl CapturingGateway {
    /// Gateway that answers the next listing with `listing`.
    pub fn with_listing(listing: Result<Paginated<TutorProfile>, ClientError>) -> Self {
        Self {
            listing: Arc::new(Mutex::new(Some(listing))),
            ..Self::default()
        }
    }

    /// Gateway that answers the next profile lookup with `profile`.
    pub fn with_profile(profile: Result<TutorProfile, ClientError>) -> Self {
        Self {
            profile: Arc::new(Mutex::new(Some(profile))),
            ..Self::default()
        }
    }

    /// Gateway that answers the next testimonial listing with `testimonials`.
    pub fn with_testimonials(testimonials: Result<Vec<Testimonial>, ClientError>) -> Self {
        Self {
            testimonials: Arc::new(Mutex::new(Some(testimonials))),
            ..Self::default()
        }
    }

    /// Gateway that resolves the token to `user` and, for tutors, `own_profile`.
    pub fn with_session(
        user: Result<UserAccount, ClientError>,
        own_profile: Result<Option<TutorProfile>, ClientError>,
    ) -> Self {
        Self {
            user: Arc::new(Mutex::new(Some(user))),
            own_profile: Arc::new(Mutex::new(Some(own_profile))),
            ..Self::default()
        }
    }

    /// Returns the token passed to the last account lookup.
    pub fn presented_token(&self) -> Option<String> {
        self.presented_token
            .lock()
            .expect("token mutex should be available")
            .clone()
    }

    /// Returns the filter passed to the last listing call.
    pub fn captured_filter(&self) -> Option<BrowseFilter> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .clone()
    }
}

fn replay<T>(canned: &Canned<T>) -> Result<T, ClientError> {
    canned
        .lock()
        .expect("canned response mutex should be available")
        .take()
        .expect("response should only be consumed once")
}

fn unsupported<T>() -> Result<T, ClientError> {
    Err(ClientError::Api {
        message: "not used by the CLI".to_owned(),
    })
}

#[async_trait]
impl TutorGateway for CapturingGateway {
    async fn list_tutors(
        &self,
        filter: &BrowseFilter,
    ) -> Result<Paginated<TutorProfile>, ClientError> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .replace(filter.clone());
        replay(&self.listing)
    }

    async fn tutor_profile(&self, _tutor_id: &str) -> Result<TutorProfile, ClientError> {
        replay(&self.profile)
    }

    async fn own_profile(&self, _token: &AccessToken) -> Result<Option<TutorProfile>, ClientError> {
        replay(&self.own_profile)
    }

    async fn create_profile(
        &self,
        _token: &AccessToken,
        _draft: &TutorProfileDraft,
    ) -> Result<TutorProfile, ClientError> {
        unsupported()
    }

    async fn update_profile(
        &self,
        _token: &AccessToken,
        _tutor_id: &str,
        _draft: &TutorProfileDraft,
    ) -> Result<TutorProfile, ClientError> {
        unsupported()
    }

    async fn delete_profile(
        &self,
        _token: &AccessToken,
        _tutor_id: &str,
    ) -> Result<(), ClientError> {
        unsupported()
    }
}

#[async_trait]
impl AuthGateway for CapturingGateway {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthSession, ClientError> {
        unsupported()
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<AuthSession, ClientError> {
        unsupported()
    }

    async fn current_user(&self, token: &AccessToken) -> Result<UserAccount, ClientError> {
        self.presented_token
            .lock()
            .expect("token mutex should be available")
            .replace(token.value().to_owned());
        replay(&self.user)
    }
}

#[async_trait]
impl FeedbackGateway for CapturingGateway {
    async fn rate_tutor(
        &self,
        _token: &AccessToken,
        _tutor_id: &str,
        _rating: &RatingSubmission,
    ) -> Result<RatingSummary, ClientError> {
        unsupported()
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, ClientError> {
        replay(&self.testimonials)
    }

    async fn post_testimonial(
        &self,
        _token: &AccessToken,
        _testimonial: &NewTestimonial,
    ) -> Result<Testimonial, ClientError> {
        unsupported()
    }
}

/// Builds an account with the given role.
pub fn account(role: UserRole) -> UserAccount {
    UserAccount {
        id: "u-1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role,
    }
}

/// Builds a tutor profile with the fields the CLI prints.
pub fn tutor(id: &str, name: &str, average: f64, count: u32) -> TutorProfile {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "subjects": ["maths", "physics"],
        "grade_levels": ["high_school", "college"],
        "hourly_rate": 35,
        "mode": "online",
        "location": "Leeds",
        "bio": "Patient and methodical.",
        "rating": {"average": average, "count": count}
    }))
    .expect("tutor should decode")
}
