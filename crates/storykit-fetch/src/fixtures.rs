//! Fixture repository
//!
//! An in-process, read-only table mapping content keys to bundled story
//! records. Parsed once on first access, read many times; lookup is exact
//! match and side-effect free. The `home` record doubles as the universal
//! fallback for keys with no fixture of their own.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use storykit_content::{ContentKey, RawStory};

/// Bundled fixture JSON, one record per registered key
const BUNDLED: &[(&str, &str)] = &[
    ("home", include_str!("../fixtures/home.json")),
    ("about", include_str!("../fixtures/about.json")),
    ("blog", include_str!("../fixtures/blog.json")),
    ("site-settings", include_str!("../fixtures/site-settings.json")),
];

static TABLE: Lazy<HashMap<&'static str, RawStory>> = Lazy::new(|| {
    BUNDLED
        .iter()
        .map(|(key, json)| {
            let story: RawStory = serde_json::from_str(json)
                .unwrap_or_else(|e| panic!("bundled fixture {key} is invalid: {e}"));
            (*key, story)
        })
        .collect()
});

/// Look up the fixture registered for a key, if any
#[inline]
#[must_use]
pub fn lookup(key: &ContentKey) -> Option<&'static RawStory> {
    TABLE.get(key.as_str())
}

/// The fixture for a key, or the universal `home` fallback
///
/// Every key resolves to some record: keys with their own fixture get it,
/// unknown keys get the home record instead.
#[must_use]
pub fn fallback(key: &ContentKey) -> &'static RawStory {
    lookup(key).unwrap_or_else(|| {
        TABLE
            .get(ContentKey::HOME)
            .expect("home fixture is always bundled")
    })
}

/// Keys with a registered fixture
///
/// This is the known-routes list the routing layer compares against when
/// deciding whether a request deserves a redirect; the envelope itself
/// never reports a miss.
pub fn registered_keys() -> impl Iterator<Item = &'static str> {
    TABLE.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_fixture_parses() {
        assert_eq!(TABLE.len(), BUNDLED.len());
    }

    #[test]
    fn lookup_finds_registered_keys() {
        let home = lookup(&ContentKey::home()).unwrap();
        assert_eq!(home.name, "Home");
        assert_eq!(home.slug, "home");

        let settings = lookup(&ContentKey::settings()).unwrap();
        assert_eq!(settings.content["component"], "site_settings");
    }

    #[test]
    fn lookup_misses_unknown_keys() {
        let key = ContentKey::new("no-such-page").unwrap();
        assert!(lookup(&key).is_none());
    }

    #[test]
    fn fallback_prefers_dedicated_fixture() {
        let key = ContentKey::new("about").unwrap();
        assert_eq!(fallback(&key).name, "About");
    }

    #[test]
    fn fallback_degrades_unknown_keys_to_home() {
        let key = ContentKey::new("no-such-page").unwrap();
        assert_eq!(fallback(&key).name, "Home");
    }

    #[test]
    fn registered_keys_cover_static_routes() {
        let keys: Vec<_> = registered_keys().collect();
        for expected in ["home", "about", "blog", "site-settings"] {
            assert!(keys.contains(&expected), "missing {expected}");
        }
    }
}
