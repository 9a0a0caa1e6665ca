use gloo_net::http::Request;
use leptos::*;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;

/// API error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Unauthorized - please log in")]
    Unauthorized,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// API client for making HTTP requests; cookies are attached to every request
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include) // Send cookies
            .send()
            .await?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Make a POST request without a body, ignoring any response body
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }
}

/// Share one client with every component below the app root
pub fn provide_api_client(client: ApiClient) {
    provide_context(client);
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient must be provided by a parent component")
}

/// Map non-success statuses onto `ApiError`
async fn check_status(
    response: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, ApiError> {
    let status = response.status();

    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized);
    }

    if !response.ok() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Http { status, message });
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let config = AppConfig::default().with_api_url("https://api.shop.test/");
        let client = ApiClient::with_config(&config);
        assert_eq!(client.url("/api/v1/auth/me"), "https://api.shop.test/api/v1/auth/me");
    }

    #[test]
    fn test_client_is_shared_through_context() {
        let runtime = create_runtime();
        let config = AppConfig::default().with_api_url("https://api.shop.test");
        provide_api_client(ApiClient::with_config(&config));

        let client = use_api_client();
        assert_eq!(client.url("/api/v1/auth/me"), "https://api.shop.test/api/v1/auth/me");
        runtime.dispose();
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Http {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 502: bad gateway");
        assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized - please log in");
    }
}
