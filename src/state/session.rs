//! Session oracle state shared by the route guards

use gloo_storage::{SessionStorage, Storage};
use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::models::CurrentUser;

const RETURN_TO_KEY: &str = "return_to";

/// Resolved answer from the session oracle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Authenticated(CurrentUser),
}

impl Session {
    /// Interpret a session lookup. Every failure counts as anonymous.
    pub fn from_lookup(result: Result<CurrentUser, ApiError>) -> Self {
        match result {
            Ok(user) => Session::Authenticated(user),
            Err(ApiError::Unauthorized) => Session::Anonymous,
            Err(e) => {
                log::warn!("Session lookup failed, treating as signed out: {}", e);
                Session::Anonymous
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(CurrentUser::is_admin)
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }
}

/// State of the session query as seen by a guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionQuery {
    Pending,
    Resolved(Session),
}

impl SessionQuery {
    /// Combine the resource's loading flag with its last value. A refetch
    /// in flight reads as pending even while the previous value is kept.
    pub fn from_state(loading: bool, value: Option<Session>) -> Self {
        match value {
            Some(session) if !loading => SessionQuery::Resolved(session),
            _ => SessionQuery::Pending,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    version: RwSignal<u32>,
    resource: Resource<u32, Session>,
}

impl SessionContext {
    /// Current query state
    pub fn query(&self) -> SessionQuery {
        SessionQuery::from_state(self.resource.loading().get(), self.resource.get())
    }

    /// Resolved session, if any
    pub fn session(&self) -> Option<Session> {
        match self.query() {
            SessionQuery::Resolved(session) => Some(session),
            SessionQuery::Pending => None,
        }
    }

    /// Force the oracle to be asked again, e.g. after login or logout
    pub fn invalidate(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }
}

pub fn provide_session_context(client: ApiClient) {
    let version = create_rw_signal(0u32);
    let resource = create_local_resource(
        move || version.get(),
        move |_| {
            let client = client.clone();
            async move { Session::from_lookup(client.current_user().await) }
        },
    );

    provide_context(SessionContext { version, resource });
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext must be provided by a parent component")
}

/// Only same-origin absolute paths are accepted as post-login targets
pub fn sanitize_return_to(path: Option<&str>) -> String {
    match path {
        Some(p) if p.starts_with('/') && !p.starts_with("//") && !p.contains('\\') => {
            p.to_string()
        }
        _ => "/".to_string(),
    }
}

/// Remember where the user was heading before being sent to sign in
pub fn remember_return_to(path: &str) {
    let _ = SessionStorage::set(RETURN_TO_KEY, path);
}

/// Get and remove the remembered destination
pub fn take_return_to() -> Option<String> {
    let path = SessionStorage::get(RETURN_TO_KEY).ok();
    SessionStorage::delete(RETURN_TO_KEY);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            id: "u1".to_string(),
            email: "u1@shop.test".to_string(),
            name: None,
            role,
        }
    }

    #[test]
    fn test_lookup_success() {
        let session = Session::from_lookup(Ok(user(Role::Admin)));
        assert!(session.is_authenticated());
        assert!(session.is_admin());
    }

    #[test]
    fn test_lookup_unauthorized_is_anonymous() {
        let session = Session::from_lookup(Err(ApiError::Unauthorized));
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn test_lookup_network_failure_is_anonymous() {
        let session = Session::from_lookup(Err(ApiError::Network("offline".to_string())));
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_regular_user_is_not_admin() {
        let session = Session::Authenticated(user(Role::User));
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_refetch_in_flight_is_pending() {
        let stale = Session::Authenticated(user(Role::Admin));
        assert_eq!(SessionQuery::from_state(true, Some(stale.clone())), SessionQuery::Pending);
        assert_eq!(SessionQuery::from_state(true, None), SessionQuery::Pending);
        assert_eq!(SessionQuery::from_state(false, None), SessionQuery::Pending);
        assert_eq!(
            SessionQuery::from_state(false, Some(stale.clone())),
            SessionQuery::Resolved(stale)
        );
    }

    #[test]
    fn test_sanitize_return_to() {
        assert_eq!(sanitize_return_to(Some("/cart?step=2")), "/cart?step=2");
        assert_eq!(sanitize_return_to(Some("//evil.test/x")), "/");
        assert_eq!(sanitize_return_to(Some("https://evil.test")), "/");
        assert_eq!(sanitize_return_to(Some("/\\evil.test")), "/");
        assert_eq!(sanitize_return_to(None), "/");
    }
}
