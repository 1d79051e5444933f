//! Navigation guard gating every route on authentication.
//!
//! The guard is stateless and synchronous: it reads the in-memory
//! authentication flag on every navigation attempt and never consults the
//! remote service. The session store is passed in explicitly by whoever
//! drives navigation.

use crate::state::auth::SessionStore;

/// The one path that does not require authentication.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a navigation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Navigation proceeds to the requested path unchanged.
    Allow,
    /// Navigation is redirected to `to` instead.
    Redirect { to: String },
}

/// Check a navigation attempt against the current session.
///
/// Unauthenticated visitors are redirected to [`LOGIN_PATH`] for every
/// target other than the login page itself; authenticated visitors pass
/// through for every path, the login page included.
#[must_use]
pub fn check_navigation(auth: &SessionStore, path: &str) -> RouteDecision {
    if !auth.is_authenticated() && path != LOGIN_PATH {
        tracing::debug!(%path, "unauthenticated navigation redirected");
        return RouteDecision::Redirect { to: LOGIN_PATH.to_owned() };
    }

    RouteDecision::Allow
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
