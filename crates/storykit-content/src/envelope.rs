//! Story envelopes
//!
//! The uniform result of any fetch. Callers cannot tell live content from
//! fallback content through the envelope; that distinction is logged, never
//! encoded here.

use crate::story::Story;
use serde::{Deserialize, Serialize};

/// Uniform fetch result
///
/// Invariant: `status == 200` implies the story is present. The fetch layer
/// only builds envelopes through [`StoryEnvelope::ok`], so the invariant
/// holds by construction; there is no status value for irrecoverable
/// failure because the layer never produces one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryEnvelope<T> {
    status: u16,
    story: Option<Story<T>>,
}

impl<T> StoryEnvelope<T> {
    /// Wrap a resolved story in a 200 envelope
    #[inline]
    #[must_use]
    pub fn ok(story: Story<T>) -> Self {
        Self {
            status: 200,
            story: Some(story),
        }
    }

    /// HTTP-style status code (`200` for any resolved content)
    #[inline]
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The resolved story, if present
    #[inline]
    #[must_use]
    pub fn story(&self) -> Option<&Story<T>> {
        self.story.as_ref()
    }

    /// Consume the envelope, yielding the story
    #[inline]
    #[must_use]
    pub fn into_story(self) -> Option<Story<T>> {
        self.story
    }
}
