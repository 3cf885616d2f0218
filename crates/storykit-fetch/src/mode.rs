//! Mode detection
//!
//! Classifies a run as ONLINE or OFFLINE from credential presence alone.
//! Detection is pure and recomputed on every fetch so that a process can
//! transition between modes between two calls; the [`TokenProvider`] seam
//! lets tests pick the mode without touching the process environment.

use serde::{Deserialize, Serialize};

/// Environment variable holding the CMS delivery token
pub const CMS_TOKEN_ENV: &str = "CMS_DELIVERY_TOKEN";

/// ONLINE/OFFLINE classification of the current fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// A delivery token is present; remote fetches are attempted
    Online,
    /// No delivery token; every fetch resolves from fixtures
    Offline,
}

impl Mode {
    /// Classify from an optional token value
    ///
    /// Offline iff the token is absent or empty after trimming. Pure; never
    /// panics.
    #[inline]
    #[must_use]
    pub fn detect(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.trim().is_empty() => Self::Online,
            _ => Self::Offline,
        }
    }

    /// Whether this is the offline mode
    #[inline]
    #[must_use]
    pub fn is_offline(self) -> bool {
        self == Self::Offline
    }
}

/// Source of the CMS delivery token, consulted on every fetch
pub trait TokenProvider: Send + Sync {
    /// Current token value, if any
    fn token(&self) -> Option<String>;

    /// Detect the current mode from this provider
    fn mode(&self) -> Mode {
        Mode::detect(self.token().as_deref())
    }
}

/// Production provider: re-reads [`CMS_TOKEN_ENV`] on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvToken;

impl TokenProvider for EnvToken {
    fn token(&self) -> Option<String> {
        std::env::var(CMS_TOKEN_ENV).ok()
    }
}

/// Fixed token value, for deterministic tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    /// Provider with a token present (ONLINE)
    #[inline]
    #[must_use]
    pub fn present(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Provider with no token (OFFLINE)
    #[inline]
    #[must_use]
    pub fn absent() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_online_with_token() {
        assert_eq!(Mode::detect(Some("tok-123")), Mode::Online);
    }

    #[test]
    fn detect_offline_without_token() {
        assert_eq!(Mode::detect(None), Mode::Offline);
        assert_eq!(Mode::detect(Some("")), Mode::Offline);
        assert_eq!(Mode::detect(Some("   ")), Mode::Offline);
    }

    #[test]
    fn static_provider_fixes_the_mode() {
        assert_eq!(StaticToken::present("tok").mode(), Mode::Online);
        assert_eq!(StaticToken::absent().mode(), Mode::Offline);
    }

    #[test]
    fn mode_is_recomputed_per_call() {
        // A provider whose answer changes between calls flips the mode.
        use std::sync::atomic::{AtomicBool, Ordering};

        struct Flip(AtomicBool);
        impl TokenProvider for Flip {
            fn token(&self) -> Option<String> {
                if self.0.swap(false, Ordering::SeqCst) {
                    Some("tok".to_string())
                } else {
                    None
                }
            }
        }

        let provider = Flip(AtomicBool::new(true));
        assert_eq!(provider.mode(), Mode::Online);
        assert_eq!(provider.mode(), Mode::Offline);
    }
}
