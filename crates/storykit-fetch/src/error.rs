//! Error types for the fetch layer
//!
//! Every variant here is absorbed inside [`SafeFetcher`](crate::SafeFetcher)
//! and converted into a fixture projection; callers of the public fetch
//! surface never observe one.

/// Failures of a single remote fetch attempt
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No delivery token configured
    #[error("no CMS delivery token configured")]
    MissingCredential,

    /// Network-level failure (unreachable, timeout, connection reset)
    #[error("transport failure: {message}")]
    Transport {
        /// Underlying transport description
        message: String,
    },

    /// The CMS answered with a non-2xx status
    #[error("CMS returned status {code}")]
    Status {
        /// HTTP status code from the CMS
        code: u16,
    },

    /// The response body could not be materialized into a story
    #[error("payload decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether the failure came from the remote side rather than local config
    #[inline]
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. } | Self::Decode(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status {
                code: status.as_u16(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}
