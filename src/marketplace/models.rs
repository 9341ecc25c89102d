//! Data models exchanged with the marketplace API.
//!
//! Public types are the domain records views work with. Types prefixed with
//! `Api` are wire envelopes that convert into them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ClientError;
use super::token::AccessToken;
use crate::pagination::PageInfo;

const MAX_BIO_CHARS: usize = 2000;

/// Role attached to a marketplace account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Looks for tutors and sends requests.
    #[default]
    Student,
    /// Publishes a tutor profile.
    Tutor,
    /// Moderates listings.
    Admin,
}

/// Signed-in account as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Account identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Account role.
    #[serde(default)]
    pub role: UserRole,
}

impl UserRole {
    /// Returns the wire value for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Tutor => "tutor",
            Self::Admin => "admin",
        }
    }
}

impl UserAccount {
    /// Returns true for tutor accounts.
    #[must_use]
    pub const fn is_tutor(&self) -> bool {
        matches!(self.role, UserRole::Tutor)
    }
}

/// Email and password pair used to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Login email address.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

/// Details needed to create an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Requested role.
    pub role: UserRole,
}

/// Token and account returned by login or signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Bearer token for subsequent calls.
    pub token: AccessToken,
    /// The signed-in account.
    pub user: UserAccount,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiAuthResponse {
    token: String,
    user: UserAccount,
}

impl TryFrom<ApiAuthResponse> for AuthSession {
    type Error = ClientError;

    fn try_from(value: ApiAuthResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            token: AccessToken::new(value.token)?,
            user: value.user,
        })
    }
}

/// School stage a tutor teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeLevel {
    /// Primary school.
    Elementary,
    /// Lower secondary school.
    MiddleSchool,
    /// Upper secondary school.
    HighSchool,
    /// University level.
    College,
    /// Adult and continuing education.
    Adult,
}

impl GradeLevel {
    /// Returns the wire value for this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Elementary => "elementary",
            Self::MiddleSchool => "middle_school",
            Self::HighSchool => "high_school",
            Self::College => "college",
            Self::Adult => "adult",
        }
    }
}

impl FromStr for GradeLevel {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "elementary" => Ok(Self::Elementary),
            "middle_school" => Ok(Self::MiddleSchool),
            "high_school" => Ok(Self::HighSchool),
            "college" => Ok(Self::College),
            "adult" => Ok(Self::Adult),
            other => Err(ClientError::InvalidFilter {
                message: format!("unknown grade level `{other}`"),
            }),
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How lessons are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonMode {
    /// Video lessons only.
    Online,
    /// Face-to-face lessons only.
    InPerson,
    /// Either format.
    #[default]
    Both,
}

impl LessonMode {
    /// Returns the wire value for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::InPerson => "in_person",
            Self::Both => "both",
        }
    }
}

impl FromStr for LessonMode {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "online" => Ok(Self::Online),
            "in_person" => Ok(Self::InPerson),
            "both" => Ok(Self::Both),
            other => Err(ClientError::InvalidFilter {
                message: format!("unknown lesson mode `{other}`"),
            }),
        }
    }
}

/// Aggregated star rating computed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Mean of all submitted ratings, 0 when unrated.
    #[serde(default)]
    pub average: f64,
    /// Number of ratings received.
    #[serde(default)]
    pub count: u32,
}

/// Public tutor listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorProfile {
    /// Profile identifier.
    pub id: String,
    /// Owning account, when the backend exposes it.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Tutor display name.
    pub name: String,
    /// Free-form introduction.
    #[serde(default)]
    pub bio: Option<String>,
    /// Subjects taught.
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Grade levels taught.
    #[serde(default)]
    pub grade_levels: Vec<GradeLevel>,
    /// Hourly rate in whole currency units.
    pub hourly_rate: u32,
    /// Lesson delivery mode.
    #[serde(default)]
    pub mode: LessonMode,
    /// City or region for in-person lessons.
    #[serde(default)]
    pub location: Option<String>,
    /// Profile picture served by the image CDN.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Aggregated rating.
    #[serde(default)]
    pub rating: RatingSummary,
}

/// Editable subset of a tutor profile, sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TutorProfileDraft {
    /// Tutor display name.
    pub name: String,
    /// Free-form introduction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Subjects taught.
    pub subjects: Vec<String>,
    /// Grade levels taught.
    pub grade_levels: Vec<GradeLevel>,
    /// Hourly rate in whole currency units.
    pub hourly_rate: u32,
    /// Lesson delivery mode.
    pub mode: LessonMode,
    /// City or region for in-person lessons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Previously uploaded profile picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl TutorProfileDraft {
    /// Checks the draft before it is sent to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidSubmission`] naming the first field that
    /// fails: a blank name, no non-blank subject, a zero hourly rate, or a bio
    /// longer than 2000 characters.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(invalid("name must not be blank"));
        }
        if !self.subjects.iter().any(|subject| !subject.trim().is_empty()) {
            return Err(invalid("at least one subject is required"));
        }
        if self.hourly_rate == 0 {
            return Err(invalid("hourly rate must be greater than zero"));
        }
        if self
            .bio
            .as_deref()
            .is_some_and(|bio| bio.chars().count() > MAX_BIO_CHARS)
        {
            return Err(invalid("bio must not exceed 2000 characters"));
        }
        Ok(())
    }
}

/// Progress of a tutor request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting the tutor's answer.
    #[default]
    Pending,
    /// The tutor accepted.
    Accepted,
    /// The tutor declined.
    Declined,
}

/// A student's request to be taught by a tutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorRequest {
    /// Request identifier.
    pub id: String,
    /// Tutor profile the request targets.
    pub tutor_id: String,
    /// Requesting student, when visible to the caller.
    #[serde(default)]
    pub student_id: Option<String>,
    /// Subject the student needs help with.
    pub subject: String,
    /// Message to the tutor.
    pub message: String,
    /// Current status.
    #[serde(default)]
    pub status: RequestStatus,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for contacting a tutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTutorRequest {
    /// Tutor profile to contact.
    pub tutor_id: String,
    /// Subject the student needs help with.
    pub subject: String,
    /// Message to the tutor.
    pub message: String,
}

impl NewTutorRequest {
    /// Checks the request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidSubmission`] when the tutor, subject, or
    /// message is blank.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.tutor_id.trim().is_empty() {
            return Err(invalid("tutor must be selected"));
        }
        if self.subject.trim().is_empty() {
            return Err(invalid("subject must not be blank"));
        }
        if self.message.trim().is_empty() {
            return Err(invalid("message must not be blank"));
        }
        Ok(())
    }
}

/// Public testimonial about the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Testimonial identifier.
    pub id: String,
    /// Name shown next to the quote.
    pub author_name: String,
    /// Quote text.
    pub body: String,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for posting a testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTestimonial {
    /// Quote text.
    pub body: String,
}

impl NewTestimonial {
    /// Checks the testimonial before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidSubmission`] when the body is blank.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.body.trim().is_empty() {
            return Err(invalid("testimonial must not be blank"));
        }
        Ok(())
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// Position of this page within the result set.
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPage<T> {
    items: Vec<T>,
    #[serde(default)]
    total: u64,
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default)]
    limit: Option<u32>,
}

const fn default_page() -> u32 {
    1
}

impl<T> ApiPage<T> {
    /// Converts the envelope, falling back to `requested_limit` when the
    /// backend omits the page size.
    pub(crate) fn into_paginated(self, requested_limit: u32) -> Paginated<T> {
        let limit = self.limit.unwrap_or(requested_limit);
        Paginated {
            page_info: PageInfo::new(self.page, limit, self.total),
            items: self.items,
        }
    }
}

fn invalid(message: &str) -> ClientError {
    ClientError::InvalidSubmission {
        message: message.to_owned(),
    }
}
