//! Story records
//!
//! The CMS wire shape: a small metadata header plus a typed content body.

use serde::{Deserialize, Serialize};

/// A content record as delivered by the CMS
///
/// `T` is the content body shape; [`RawStory`] keeps the body as untyped
/// JSON for fixture storage and wire decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story<T> {
    /// Numeric record id assigned by the CMS
    pub id: u64,
    /// Human-readable record name
    pub name: String,
    /// Route slug
    pub slug: String,
    /// Full slug including folder path
    pub full_slug: String,
    /// Typed content body
    pub content: T,
}

/// A story whose content body is still untyped JSON
pub type RawStory = Story<serde_json::Value>;

impl<T> Story<T> {
    /// Create a story record
    #[inline]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        slug: impl Into<String>,
        full_slug: impl Into<String>,
        content: T,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            full_slug: full_slug.into(),
            content,
        }
    }

    /// Replace the content body, keeping the metadata header
    #[inline]
    pub fn with_content<U>(self, content: U) -> Story<U> {
        Story {
            id: self.id,
            name: self.name,
            slug: self.slug,
            full_slug: self.full_slug,
            content,
        }
    }
}
