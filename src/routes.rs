//! Route table and the auth guard.
//!
//! Routes are a closed enum rather than free-form paths; the string form
//! exists for logs, the status output and path parsing. Unknown paths map
//! to [`Route::NotFound`] instead of erroring.

use crate::auth::AuthContext;

/// Every screen in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    SignupStudent,
    SignupAlumni,
    Dashboard,
    NotFound,
}

impl Route {
    /// Canonical path string for this route.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::SignupStudent => "/signup/student",
            Self::SignupAlumni => "/signup/alumni",
            Self::Dashboard => "/dashboard",
            Self::NotFound => "/404",
        }
    }

    /// Map a path to a route. Anything unrecognized is the 404 screen.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/signup/student" => Self::SignupStudent,
            "/signup/alumni" => Self::SignupAlumni,
            "/dashboard" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    /// Whether this route sits behind the auth guard.
    #[must_use]
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Outcome of asking the guard about a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested route.
    Allow,
    /// Send the user somewhere else instead.
    Redirect(Route),
    /// Auth state is still hydrating; render nothing yet.
    Pending,
}

/// Decide whether `route` may be shown given the current auth state.
///
/// While hydration is in flight the decision is `Pending` for guarded
/// routes, never a redirect, so a user with a valid persisted session is
/// not bounced to the login screen during startup.
#[must_use]
pub fn guard(route: Route, auth: &AuthContext) -> GuardDecision {
    if !route.requires_auth() {
        return GuardDecision::Allow;
    }
    if auth.is_loading() {
        return GuardDecision::Pending;
    }
    if auth.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionStore;
    use tempfile::tempdir;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/signup/student"), Route::SignupStudent);
        assert_eq!(Route::parse("/signup/alumni"), Route::SignupAlumni);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
    }

    #[test]
    fn test_parse_unknown_path_is_not_found() {
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::parse(""), Route::NotFound);
        assert_eq!(Route::parse("/dashboard/extra"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips() {
        for route in [
            Route::Landing,
            Route::Login,
            Route::SignupStudent,
            Route::SignupAlumni,
            Route::Dashboard,
        ] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn test_only_dashboard_is_guarded() {
        assert!(Route::Dashboard.requires_auth());
        for route in [
            Route::Landing,
            Route::Login,
            Route::SignupStudent,
            Route::SignupAlumni,
            Route::NotFound,
        ] {
            assert!(!route.requires_auth(), "{route:?}");
        }
    }

    #[test]
    fn test_guard_pending_while_hydrating() {
        let dir = tempdir().unwrap();
        let auth = AuthContext::new(SessionStore::new(dir.path()));
        assert_eq!(guard(Route::Dashboard, &auth), GuardDecision::Pending);
        // Public routes never wait on hydration
        assert_eq!(guard(Route::Login, &auth), GuardDecision::Allow);
    }

    #[test]
    fn test_guard_redirects_anonymous_to_login() {
        let dir = tempdir().unwrap();
        let mut auth = AuthContext::new(SessionStore::new(dir.path()));
        auth.hydrate().unwrap();
        assert_eq!(
            guard(Route::Dashboard, &auth),
            GuardDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_guard_allows_authenticated() {
        let dir = tempdir().unwrap();
        let mut auth = AuthContext::new(SessionStore::new(dir.path()));
        auth.hydrate().unwrap();
        auth.login("a@b.edu", "x").unwrap();
        assert_eq!(guard(Route::Dashboard, &auth), GuardDecision::Allow);
    }

    #[test]
    fn test_guard_allows_public_routes_for_everyone() {
        let dir = tempdir().unwrap();
        let mut auth = AuthContext::new(SessionStore::new(dir.path()));
        auth.hydrate().unwrap();
        for route in [Route::Landing, Route::Login, Route::NotFound] {
            assert_eq!(guard(route, &auth), GuardDecision::Allow);
        }
    }
}
