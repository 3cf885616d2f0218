//! Global settings cache
//!
//! Site-wide settings change rarely and are read on every page, so they are
//! resolved once per process and never refreshed. This is a deliberate
//! resolve-once slot, not a generic cache: no TTL, no eviction, no manual
//! bust beyond the test-isolation [`reset`](SettingsCache::reset).

use crate::client::CmsClient;
use crate::fetcher::SafeFetcher;
use storykit_content::{ContentKey, GlobalSettings};
use tokio::sync::OnceCell;

/// Resolve-once wrapper for the reserved settings record
///
/// Concurrent first calls collapse into a single in-flight fetch: the slot
/// admits one initializer and every other caller waits on it, so the remote
/// client sees at most one settings request per process.
pub struct SettingsCache<C> {
    fetcher: SafeFetcher<C>,
    slot: OnceCell<GlobalSettings>,
}

impl<C: CmsClient> SettingsCache<C> {
    /// Create an empty cache over a fetcher
    #[inline]
    pub fn new(fetcher: SafeFetcher<C>) -> Self {
        Self {
            fetcher,
            slot: OnceCell::new(),
        }
    }

    /// Site-wide settings, resolved at most once per process
    ///
    /// The first call fetches through the safe path (so an outage yields
    /// the settings fixture, not an error); every later call returns the
    /// stored value without touching the fetcher.
    pub async fn get_global_settings(&self) -> GlobalSettings {
        self.slot
            .get_or_init(|| async {
                let envelope = self
                    .fetcher
                    .get_safe_story::<GlobalSettings>(&ContentKey::settings())
                    .await;
                envelope
                    .into_story()
                    .map(|story| story.content)
                    .unwrap_or_default()
            })
            .await
            .clone()
    }

    /// Whether the slot has been populated
    #[inline]
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.slot.initialized()
    }

    /// Empty the slot so the next call resolves again
    ///
    /// Exists for test isolation; production code never refreshes settings.
    pub fn reset(&mut self) {
        self.slot = OnceCell::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockCmsClient;
    use crate::mode::StaticToken;
    use serde_json::json;
    use storykit_content::{RawStory, Story};

    fn settings_story() -> RawStory {
        Story::new(
            4,
            "Site Settings",
            "site-settings",
            "site-settings",
            json!({"component": "site_settings", "site_title": "Live Title"}),
        )
    }

    #[tokio::test]
    async fn sequential_calls_fetch_exactly_once() {
        let mut client = MockCmsClient::new();
        client
            .expect_get_story()
            .times(1)
            .returning(|_, _| Ok(settings_story()));
        let cache = SettingsCache::new(SafeFetcher::new(client, StaticToken::present("tok")));

        let first = cache.get_global_settings().await;
        let second = cache.get_global_settings().await;
        let third = cache.get_global_settings().await;

        assert_eq!(first.site_title, "Live Title");
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[tokio::test]
    async fn outage_populates_cache_from_fixture() {
        let mut client = MockCmsClient::new();
        client
            .expect_get_story()
            .times(1)
            .returning(|_, _| Err(crate::error::FetchError::Status { code: 503 }));
        let cache = SettingsCache::new(SafeFetcher::new(client, StaticToken::present("tok")));

        let settings = cache.get_global_settings().await;
        assert_eq!(settings.site_title, "storykit demo site");
        assert!(cache.is_populated());
    }

    #[tokio::test]
    async fn reset_empties_the_slot() {
        let mut client = MockCmsClient::new();
        client
            .expect_get_story()
            .times(2)
            .returning(|_, _| Ok(settings_story()));
        let mut cache = SettingsCache::new(SafeFetcher::new(client, StaticToken::present("tok")));

        let _ = cache.get_global_settings().await;
        assert!(cache.is_populated());

        cache.reset();
        assert!(!cache.is_populated());

        let again = cache.get_global_settings().await;
        assert_eq!(again.site_title, "Live Title");
    }
}
