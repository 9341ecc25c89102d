//! Marketplace accounts, tutor profiles, and the REST gateways behind them.
//!
//! Records mirror the backend's JSON, validated drafts guard every write,
//! and transport or HTTP failures are mapped into [`ClientError`] so callers
//! can show a precise message without touching reqwest types.

pub mod error;
pub mod gateway;
pub mod models;
pub mod token;

pub use error::ClientError;
pub use gateway::{
    AuthGateway, CachingTutorGateway, FeedbackGateway, GatewaySettings, HttpMarketplaceGateway,
    RetryPolicy, TutorGateway, TutorRequestGateway,
};
pub use models::{
    AuthSession, Credentials, GradeLevel, LessonMode, NewTestimonial, NewTutorRequest, Paginated,
    RatingSummary, RequestStatus, SignupRequest, Testimonial, TutorProfile, TutorProfileDraft,
    TutorRequest, UserAccount, UserRole,
};
pub use token::AccessToken;

#[cfg(test)]
pub use gateway::{MockAuthGateway, MockFeedbackGateway, MockTutorGateway, MockTutorRequestGateway};
