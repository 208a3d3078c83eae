//! HTTP client for the upstream comments endpoints.
//!
//! This module provides the `CommentsApi` seam used by the gateway handlers and
//! its reqwest-backed implementation.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use comment_relay_core::{NewComment, PostId};

use crate::error::{Result, UpstreamError};
use crate::UpstreamConfig;

/// Operations the relay forwards to the upstream API.
///
/// Each call issues exactly one outbound request; nothing is retried.
#[async_trait]
pub trait CommentsApi: Send + Sync {
    /// Fetch the comments of a post.
    ///
    /// # Errors
    ///
    /// Returns `Status` for non-success responses (404 for an unknown post),
    /// `Unreachable` for transport failures and `Malformed` for non-JSON bodies.
    async fn list_comments(&self, post_id: &PostId) -> Result<Value>;

    /// Create a comment on a post.
    ///
    /// # Errors
    ///
    /// Same as [`CommentsApi::list_comments`]; a rejected token shows up as
    /// `Status(401)`.
    async fn create_comment(&self, post_id: &PostId, comment: &NewComment) -> Result<Value>;
}

/// reqwest implementation of [`CommentsApi`].
#[derive(Debug, Clone)]
pub struct HttpCommentsApi {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpCommentsApi {
    /// Create a new client with library-default timeouts.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Client` if the TLS backend cannot be initialized.
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("comment-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: UpstreamConfig) -> Self {
        Self { client, config }
    }

    /// Get the upstream configuration.
    #[must_use]
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Turn a response into its JSON body, or a typed error for non-2xx.
    async fn handle_response(url: &str, response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(url = %url, status = %status, "Upstream returned error status");
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl CommentsApi for HttpCommentsApi {
    async fn list_comments(&self, post_id: &PostId) -> Result<Value> {
        let url = self.config.comments_url(post_id);
        tracing::debug!(url = %url, "Fetching comments from upstream");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;

        Self::handle_response(&url, response).await
    }

    async fn create_comment(&self, post_id: &PostId, comment: &NewComment) -> Result<Value> {
        let url = self.config.comments_url(post_id);
        tracing::debug!(url = %url, "Posting comment to upstream");

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(comment);

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;

        Self::handle_response(&url, response).await
    }
}
