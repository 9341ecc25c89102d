//! Signed-in session state and route guarding.
//!
//! A [`SessionContext`] is an ordinary value: views and guards receive it as
//! a parameter and never read session data from globals, so each can be
//! exercised with a hand-built session.

pub mod guard;

pub use guard::{GuardDecision, Route, guard};

use tracing::debug;

use crate::marketplace::error::ClientError;
use crate::marketplace::gateway::{AuthGateway, TutorGateway};
use crate::marketplace::models::{TutorProfile, UserAccount};
use crate::marketplace::token::AccessToken;

/// Load state of the signed-in user's tutor profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    /// The profile request has not finished yet.
    #[default]
    Loading,
    /// The user has no tutor profile.
    Missing,
    /// The user's published profile.
    Loaded(Box<TutorProfile>),
}

/// Who is signed in, and what we know about their tutor profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    user: Option<UserAccount>,
    user_loading: bool,
    profile: ProfileState,
}

impl SessionContext {
    /// A session whose user is still being fetched.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            user: None,
            user_loading: true,
            profile: ProfileState::Loading,
        }
    }

    /// A session with nobody signed in.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            user: None,
            user_loading: false,
            profile: ProfileState::Missing,
        }
    }

    /// A session for `user` with the given profile state.
    #[must_use]
    pub const fn signed_in(user: UserAccount, profile: ProfileState) -> Self {
        Self {
            user: Some(user),
            user_loading: false,
            profile,
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserAccount> {
        self.user.as_ref()
    }

    /// The signed-in user's tutor profile, if loaded.
    #[must_use]
    pub fn profile(&self) -> Option<&TutorProfile> {
        match &self.profile {
            ProfileState::Loaded(profile) => Some(profile.as_ref()),
            ProfileState::Loading | ProfileState::Missing => None,
        }
    }

    /// Returns `true` while either the user or their profile is loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.user_loading || matches!(self.profile, ProfileState::Loading)
    }

    /// Returns `true` when a tutor profile has been loaded.
    #[must_use]
    pub const fn has_profile(&self) -> bool {
        matches!(self.profile, ProfileState::Loaded(_))
    }

    /// Records the outcome of a profile fetch.
    pub fn set_profile(&mut self, profile: Option<TutorProfile>) {
        self.profile = profile.map_or(ProfileState::Missing, |loaded| {
            ProfileState::Loaded(Box::new(loaded))
        });
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Resolves the session for an optional stored token.
///
/// No token, or a token the backend rejects, yields an anonymous session.
/// Tutors additionally have their own profile fetched; other roles never
/// have one.
///
/// # Errors
///
/// Propagates gateway failures other than an authentication rejection.
pub async fn load_session<A, T>(
    auth: &A,
    tutors: &T,
    token: Option<&AccessToken>,
) -> Result<SessionContext, ClientError>
where
    A: AuthGateway,
    T: TutorGateway,
{
    let Some(access) = token else {
        return Ok(SessionContext::anonymous());
    };
    let user = match auth.current_user(access).await {
        Ok(user) => user,
        Err(ClientError::Authentication { message }) => {
            debug!(%message, "stored token rejected; continuing signed out");
            return Ok(SessionContext::anonymous());
        }
        Err(error) => return Err(error),
    };
    let profile = if user.is_tutor() {
        tutors.own_profile(access).await?
    } else {
        None
    };
    let mut session = SessionContext::signed_in(user, ProfileState::Loading);
    session.set_profile(profile);
    Ok(session)
}
