//! Authentication gate for protected routes.

use super::route::Route;
use crate::session::SessionService;

/// Outcome of checking a route against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the requested content unchanged.
    Allow,
    /// Navigate elsewhere instead.
    Redirect {
        /// Where to go.
        to: Route,
        /// Replace the current history entry rather than pushing a new one.
        replace: bool,
    },
}

/// Decides whether `route` may render given the stored `token`.
///
/// Any non-empty token is accepted; it is never validated locally.
#[must_use]
pub fn decide(token: Option<&str>, route: &Route) -> GateDecision {
    if route.is_public() || token.is_some_and(|t| !t.is_empty()) {
        GateDecision::Allow
    } else {
        GateDecision::Redirect {
            to: Route::Login,
            replace: true,
        }
    }
}

/// Guards protected routes behind the presence of a session token.
///
/// The decision is taken from the session as it is at the moment of the
/// check; a token cleared elsewhere only takes effect at the next check.
#[derive(Debug, Clone)]
pub struct AuthGate {
    session: SessionService,
}

impl AuthGate {
    /// Creates a gate reading from `session`.
    #[must_use]
    pub fn new(session: SessionService) -> Self {
        Self { session }
    }

    /// Checks `route` against the current session.
    #[must_use]
    pub fn check(&self, route: &Route) -> GateDecision {
        let decision = decide(self.session.token().as_deref(), route);
        if decision != GateDecision::Allow {
            tracing::debug!(%route, "No session, redirecting to login");
        }
        decision
    }

    /// The session this gate reads.
    #[must_use]
    pub fn session(&self) -> &SessionService {
        &self.session
    }
}
