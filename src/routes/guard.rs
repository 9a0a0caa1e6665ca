//! Access gates attached to branches of the route tree.
//!
//! Guards only shape navigation; the backend still authorizes every request.

use crate::state::{Session, SessionQuery};

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Where a denied navigation goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub to: &'static str,
    /// Destination to resume after signing in
    pub return_to: Option<String>,
}

impl RedirectTarget {
    fn home() -> Self {
        Self {
            to: HOME_PATH,
            return_to: None,
        }
    }

    fn sign_in(intended: &str) -> Self {
        Self {
            to: SIGN_IN_PATH,
            return_to: Some(intended.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the nested routes
    Allow,
    /// Session not known yet; render a neutral placeholder
    Pending,
    Redirect(RedirectTarget),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Guard {
    /// Any signed-in account
    Private,
    /// Signed-in accounts with the admin role
    AdminOnly,
    /// Visitors without a session
    GuestOnly,
}

impl Guard {
    /// Evaluate the gate for a navigation to `intended`
    pub fn evaluate(self, query: &SessionQuery, intended: &str) -> GuardOutcome {
        match query {
            SessionQuery::Pending => GuardOutcome::Pending,
            SessionQuery::Resolved(session) => self.decide(session, intended),
        }
    }

    fn decide(self, session: &Session, intended: &str) -> GuardOutcome {
        let outcome = match self {
            Guard::Private if session.is_authenticated() => GuardOutcome::Allow,
            Guard::Private => GuardOutcome::Redirect(RedirectTarget::sign_in(intended)),
            Guard::AdminOnly if session.is_admin() => GuardOutcome::Allow,
            Guard::AdminOnly if session.is_authenticated() => {
                GuardOutcome::Redirect(RedirectTarget::home())
            }
            Guard::AdminOnly => GuardOutcome::Redirect(RedirectTarget::sign_in(intended)),
            Guard::GuestOnly if session.is_authenticated() => {
                GuardOutcome::Redirect(RedirectTarget::home())
            }
            Guard::GuestOnly => GuardOutcome::Allow,
        };

        if let GuardOutcome::Redirect(target) = &outcome {
            log::debug!("{:?} denied {} -> {}", self, intended, target.to);
        }
        outcome
    }
}
