//! Remote CMS client
//!
//! The abstract delivery-API seam the fetcher talks through, plus the
//! production HTTP implementation. Tests substitute a mock at the trait
//! boundary to assert call counts.

use crate::error::FetchError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use storykit_content::{ContentKey, RawStory};

/// Content version requested from the delivery API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Version {
    /// Published content (the default for production traffic)
    #[default]
    Published,
    /// Draft content, for editor preview
    Draft,
}

impl Version {
    /// Query-parameter value for the delivery API
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}

/// Abstract delivery-API client
///
/// One call fetches one raw story. Implementations surface every failure as
/// a [`FetchError`]; the fetcher above decides what failure means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CmsClient: Send + Sync {
    /// Fetch the raw story for a key
    ///
    /// # Errors
    /// Any transport, status, or decode failure of the remote call.
    async fn get_story(&self, key: &ContentKey, token: &str) -> Result<RawStory, FetchError>;
}

/// Delivery-API response body
#[derive(Debug, Deserialize)]
struct StoryResponse {
    story: RawStory,
}

/// HTTP implementation of [`CmsClient`] over the CMS delivery API
#[derive(Debug, Clone)]
pub struct HttpCmsClient {
    http: reqwest::Client,
    base_url: String,
    version: Version,
}

impl HttpCmsClient {
    /// Default per-request timeout
    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client against a delivery-API base URL
    ///
    /// # Errors
    /// Returns [`FetchError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>, version: Version) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport {
                message: e.to_string(),
            })?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            version,
        })
    }
}

#[async_trait]
impl CmsClient for HttpCmsClient {
    async fn get_story(&self, key: &ContentKey, token: &str) -> Result<RawStory, FetchError> {
        let url = format!("{}/stories/{}", self.base_url, key.as_str());
        let response = self
            .http
            .get(&url)
            .query(&[("token", token), ("version", self.version.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: StoryResponse = serde_json::from_slice(&body)?;
        Ok(parsed.story)
    }
}
