use super::client::{ApiClient, ApiError};
use crate::models::CurrentUser;

impl ApiClient {
    /// Get the user behind the session cookie
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get("/api/v1/auth/me").await
    }

    /// End the session on the backend
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("/api/v1/auth/logout").await
    }

    /// Backend entry point for the OAuth sign-in flow
    pub fn login_url(&self) -> String {
        self.url("/api/v1/auth/google")
    }
}
