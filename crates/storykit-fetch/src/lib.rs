//! storykit Fetch - the content resilience layer
//!
//! Stands between every page-rendering path and the remote CMS and
//! guarantees a renderable result even when the CMS is unreachable,
//! unconfigured, or failing:
//!
//! - [`Mode`]: ONLINE/OFFLINE classification from credential presence
//! - [`fixtures`]: bundled offline-safe substitutes for live records
//! - [`CmsClient`]: the abstract delivery-API client ([`HttpCmsClient`] in
//!   production, a mock in tests)
//! - [`SafeFetcher`]: the generic fetch operation that always resolves
//! - [`SettingsCache`]: resolve-once cache for site-wide settings
//!
//! # Example
//!
//! ```rust,ignore
//! use storykit_content::{ContentKey, PageContent};
//! use storykit_fetch::{EnvToken, HttpCmsClient, SafeFetcher, Version};
//!
//! let client = HttpCmsClient::new("https://api.example-cms.com/v2", Version::Published)?;
//! let fetcher = SafeFetcher::new(client, EnvToken);
//! let envelope = fetcher.get_safe_story::<PageContent>(&ContentKey::home()).await;
//! assert_eq!(envelope.status(), 200);
//! ```

mod cache;
mod client;
mod error;
mod fetcher;
pub mod fixtures;
mod mode;

pub use cache::SettingsCache;
pub use client::{CmsClient, HttpCmsClient, Version};
pub use error::FetchError;
pub use fetcher::SafeFetcher;
pub use mode::{EnvToken, Mode, StaticToken, TokenProvider, CMS_TOKEN_ENV};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
