pub mod auth;
pub mod client;

pub use client::{provide_api_client, use_api_client, ApiClient, ApiError};
