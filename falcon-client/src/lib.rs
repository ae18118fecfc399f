//! Falcon HTTP Client
//!
//! A small, type-safe HTTP client for the Falcon scheduling platform.
//!
//! The client covers the calls a launch needs: scheduling a job definition,
//! running a confirmed job, confirming a cluster, stopping a job and listing
//! job status. Credentials are part of the client value; nothing is read from
//! process-global state once the client is built.
//!
//! # Example
//!
//! ```no_run
//! use falcon_client::PlatformClient;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlatformClient::new("https://open.fedml.ai", Some("my-api-key".to_string()));
//!
//!     let result = client.schedule_job(Path::new("job.yaml"), None).await?;
//!     println!("Scheduled job {} ({})", result.job_id, result.status);
//!     Ok(())
//! }
//! ```

mod clusters;
pub mod error;
mod jobs;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client for the Falcon platform API
#[derive(Debug, Clone)]
pub struct PlatformClient {
    /// Base URL of the platform (e.g., "https://open.fedml.ai")
    base_url: String,
    /// API key sent as a bearer token, if any
    api_key: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl PlatformClient {
    /// Create a new platform client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the platform API
    /// * `api_key` - Optional user API key
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.is_empty()),
            client: Client::new(),
        }
    }

    /// Get the base URL of the platform
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry an API key
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build a request for an API path, attaching the API key when present
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PlatformClient::new("https://open.fedml.ai", None);
        assert_eq!(client.base_url(), "https://open.fedml.ai");
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = PlatformClient::new("https://open.fedml.ai/", None);
        assert_eq!(client.base_url(), "https://open.fedml.ai");
    }

    #[test]
    fn test_empty_api_key_is_dropped() {
        let client = PlatformClient::new("https://open.fedml.ai", Some(String::new()));
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_request_carries_bearer_token() {
        let client = PlatformClient::new("https://open.fedml.ai", Some("secret".to_string()));
        let request = client
            .request(Method::POST, "/api/v1/jobs/stop")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "https://open.fedml.ai/api/v1/jobs/stop");
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer secret"
        );
    }
}
