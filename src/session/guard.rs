//! Route access decisions.

use std::fmt;

use super::SessionContext;

/// Screens a signed-in or anonymous user can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page.
    Home,
    /// Sign-in form.
    Login,
    /// Account creation form.
    Signup,
    /// Tutor directory.
    Browse,
    /// Public profile of one tutor.
    TutorDetail(String),
    /// Personal dashboard.
    Dashboard,
    /// Form for publishing a tutor profile.
    CreateProfile,
    /// Form for editing the caller's tutor profile.
    EditProfile,
    /// Contact requests sent or received.
    Requests,
}

impl Route {
    /// Returns `true` when the route needs a signed-in user.
    #[must_use]
    pub const fn requires_sign_in(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::CreateProfile | Self::EditProfile | Self::Requests
        )
    }

    /// Returns `true` when only tutors may open the route.
    #[must_use]
    pub const fn tutor_only(&self) -> bool {
        matches!(self, Self::CreateProfile | Self::EditProfile)
    }

    const fn is_auth_form(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// Path the route is served under.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Signup => "/signup".to_owned(),
            Self::Browse => "/tutors".to_owned(),
            Self::TutorDetail(id) => format!("/tutors/{id}"),
            Self::Dashboard => "/dashboard".to_owned(),
            Self::CreateProfile => "/profile/new".to_owned(),
            Self::EditProfile => "/profile/edit".to_owned(),
            Self::Requests => "/requests".to_owned(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.path())
    }
}

/// Outcome of checking a navigation against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested route.
    Allow,
    /// Session data is still loading; render nothing yet.
    Wait,
    /// Send the user somewhere else instead.
    Redirect(Route),
}

/// Decides whether `route` may be shown for `session`.
///
/// Rules apply in order and the first match wins:
///
/// 1. While the session is loading, wait.
/// 2. Anonymous users are sent to the login form from protected routes.
/// 3. Signed-in users are sent from the login and signup forms to the
///    dashboard.
/// 4. Non-tutors are sent from tutor-only routes to the dashboard.
/// 5. A tutor without a profile is sent from the edit form to the create
///    form, and a tutor who already has one the other way.
/// 6. Everything else is allowed.
#[must_use]
pub fn guard(route: &Route, session: &SessionContext) -> GuardDecision {
    if session.is_loading() {
        return GuardDecision::Wait;
    }
    let Some(user) = session.user() else {
        return if route.requires_sign_in() {
            GuardDecision::Redirect(Route::Login)
        } else {
            GuardDecision::Allow
        };
    };
    if route.is_auth_form() {
        return GuardDecision::Redirect(Route::Dashboard);
    }
    if route.tutor_only() && !user.is_tutor() {
        return GuardDecision::Redirect(Route::Dashboard);
    }
    match (route, session.has_profile()) {
        (Route::EditProfile, false) => GuardDecision::Redirect(Route::CreateProfile),
        (Route::CreateProfile, true) => GuardDecision::Redirect(Route::EditProfile),
        _ => GuardDecision::Allow,
    }
}
