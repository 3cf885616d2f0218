//! Safe story fetcher
//!
//! The generic retrieval operation. Per fetch: read the token, detect the
//! mode, issue at most one remote call, and project every failure onto the
//! fixture table. The result is always a 200 envelope with a story in it;
//! outages degrade content, they never surface to the caller.

use crate::client::CmsClient;
use crate::error::FetchError;
use crate::fixtures;
use crate::mode::{Mode, TokenProvider};
use storykit_content::{ContentKey, ContentShape, RawStory, Story, StoryEnvelope};

/// Resilient fetcher over an abstract CMS client
///
/// Construction injects both collaborators: the client (mocked in tests)
/// and the token source (environment-backed in production, static in
/// tests), so no hidden global read decides the mode.
pub struct SafeFetcher<C> {
    client: C,
    tokens: Box<dyn TokenProvider>,
}

impl<C: CmsClient> SafeFetcher<C> {
    /// Create a fetcher from a client and a token source
    #[inline]
    pub fn new(client: C, tokens: impl TokenProvider + 'static) -> Self {
        Self {
            client,
            tokens: Box::new(tokens),
        }
    }

    /// Fetch the story for a key, never failing
    ///
    /// # Workflow
    /// 1. Detect the mode from the current token; OFFLINE resolves from the
    ///    fixture table with zero remote calls.
    /// 2. ONLINE issues exactly one remote call; success wraps the remote
    ///    story, any failure falls back to the fixture for the key.
    /// 3. Unknown keys degrade to the universal home fixture, so the
    ///    returned envelope always carries a story.
    ///
    /// The caller cannot tell live from fallback content through the
    /// envelope; fallbacks are recorded in the log instead.
    pub async fn get_safe_story<T: ContentShape>(&self, key: &ContentKey) -> StoryEnvelope<T> {
        match self.try_remote(key).await {
            Ok(raw) => {
                tracing::debug!(key = %key, "resolved story from CMS");
                StoryEnvelope::ok(materialize::<T>(raw))
            }
            Err(FetchError::MissingCredential) => {
                tracing::debug!(key = %key, "no CMS credential, serving fixture");
                StoryEnvelope::ok(materialize::<T>(fixtures::fallback(key).clone()))
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "CMS fetch failed, serving fixture");
                StoryEnvelope::ok(materialize::<T>(fixtures::fallback(key).clone()))
            }
        }
    }

    /// One remote attempt, or the reason there was none
    async fn try_remote(&self, key: &ContentKey) -> Result<RawStory, FetchError> {
        let token = self.tokens.token();
        if Mode::detect(token.as_deref()).is_offline() {
            // Hard requirement: no remote call may happen in this branch.
            return Err(FetchError::MissingCredential);
        }
        let token = token.unwrap_or_default();
        self.client.get_story(key, &token).await
    }
}

/// Materialize a raw story into the requested shape
///
/// Absent fields fill in from the shape's defaults; a body that cannot
/// materialize at all keeps the story metadata and takes the shape's
/// default content, so this is total.
fn materialize<T: ContentShape>(raw: RawStory) -> Story<T> {
    match serde_json::from_value::<T>(raw.content.clone()) {
        Ok(content) => raw.with_content(content),
        Err(err) => {
            tracing::warn!(
                slug = %raw.slug,
                shape = T::COMPONENT,
                error = %err,
                "story content did not materialize, using shape default"
            );
            raw.with_content(T::default())
        }
    }
}
