//! Hireline HTTP Client
//!
//! A type-safe HTTP client for the Hireline server API.
//!
//! This crate is the single transport layer shared by the editor and the CLI,
//! so endpoint knowledge lives in one place.
//!
//! # Example
//!
//! ```no_run
//! use hireline_client::PipelineClient;
//! use hireline_core::dto::pipeline::CreatePipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hireline_client::ClientError> {
//!     let client = PipelineClient::new("http://localhost:8080");
//!
//!     let pipeline = client.create_pipeline(CreatePipeline {
//!         name: "Engineering Hiring".to_string(),
//!         description: None,
//!     }).await?;
//!
//!     println!("Created pipeline: {}", pipeline.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod members;
mod pipelines;
mod steps;

pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Hireline server API
///
/// Provides methods for all server endpoints, organized into logical groups:
/// - Pipeline management (create, list, get, delete)
/// - Step mutations (create, update, delete)
/// - Member roster (create, list)
#[derive(Debug, Clone)]
pub struct PipelineClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl PipelineClient {
    /// Create a new client for the given server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a client with a pre-configured reqwest client.
    ///
    /// Use this to set timeouts, proxies, or TLS settings.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON.
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message_from_body(body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE).
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message_from_body(body),
            ));
        }

        Ok(())
    }
}

/// The server reports failures as `{"error": message}`; pull the message out
/// and fall back to the raw body for anything else on the wire.
fn error_message_from_body(body: String) -> String {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(str::to_string));

    match message {
        Some(message) => message,
        None if body.is_empty() => "Unknown error".to_string(),
        None => body,
    }
}
