//! Management API connection.
//!
//! Wraps reqwest behind the [`Connection`] trait so the post flow can be
//! exercised against a mock connection in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::request::SupportReasonRequest;
use crate::config::ApiConfig;

/// Connection-specific error type
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Raw response handed back to the classifier: status code plus body bytes.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The outbound seam to the clusters-management API.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Execute a composed request and return the raw response.
    async fn post(&self, request: &SupportReasonRequest) -> Result<ApiResponse, ConnectionError>;
}

/// reqwest-backed connection to the management API.
pub struct HttpConnection {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpConnection {
    /// Create a connection from the API settings.
    pub fn new(config: &ApiConfig) -> Result<Self, ConnectionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Create a connection with a custom base URL (for testing).
    pub fn with_base_url(base_url: &str) -> Result<Self, ConnectionError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }
}

#[async_trait]
impl Connection for HttpConnection {
    async fn post(&self, request: &SupportReasonRequest) -> Result<ApiResponse, ConnectionError> {
        debug!(path = %request.path, "posting support reason");

        let mut builder = self
            .client
            .post(format!("{}{}", self.base_url, request.path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(request.body.clone());

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();

        Ok(ApiResponse { status, body })
    }
}
