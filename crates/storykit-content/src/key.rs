//! Content keys
//!
//! A content key names one record in the CMS and in the fixture table:
//! either a route slug (`"home"`, `"about"`) or the reserved settings key.

use serde::{Deserialize, Serialize};

/// Identifier for a requested content record
///
/// Keys are non-empty and case-sensitive; the same key addresses both the
/// remote delivery API and the bundled fixture table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentKey(String);

impl ContentKey {
    /// Slug of the default record, also the universal fallback
    pub const HOME: &'static str = "home";

    /// Reserved key for site-wide settings
    pub const SETTINGS: &'static str = "site-settings";

    /// Create a key from a slug
    ///
    /// # Errors
    /// Returns [`KeyError::Empty`] if the slug is empty or whitespace-only.
    pub fn new(slug: impl Into<String>) -> Result<Self, KeyError> {
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err(KeyError::Empty);
        }
        Ok(Self(slug))
    }

    /// The default/home key
    #[inline]
    #[must_use]
    pub fn home() -> Self {
        Self(Self::HOME.to_string())
    }

    /// The reserved settings key
    #[inline]
    #[must_use]
    pub fn settings() -> Self {
        Self(Self::SETTINGS.to_string())
    }

    /// Key as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the reserved settings key
    #[inline]
    #[must_use]
    pub fn is_settings(&self) -> bool {
        self.0 == Self::SETTINGS
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContentKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ContentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Content key construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// Key was empty or whitespace-only
    #[error("content key must be non-empty")]
    Empty,
}
