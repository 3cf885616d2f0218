//! storykit Content Model
//!
//! Typed, serde-backed content records shared by every fetch path.
//!
//! # Core Concepts
//!
//! - [`ContentKey`]: slug or reserved key identifying a content record
//! - [`Story<T>`]: the CMS record wrapper around a typed content body
//! - [`ContentShape`]: trait for content body types (page, settings, etc.)
//! - [`StoryEnvelope<T>`]: the uniform fetch result, always renderable
//!
//! # Example
//!
//! ```rust
//! use storykit_content::{PageContent, Story, StoryEnvelope};
//!
//! let story = Story::new(1, "Home", "home", "home", PageContent::default());
//! let envelope = StoryEnvelope::ok(story);
//! assert_eq!(envelope.status(), 200);
//! assert!(envelope.story().is_some());
//! ```

mod envelope;
mod key;
mod shape;
mod shapes;
mod story;

pub use envelope::StoryEnvelope;
pub use key::{ContentKey, KeyError};
pub use shape::ContentShape;
pub use shapes::{
    ContactInfo, FeatureFlags, FooterColumn, GlobalSettings, NavLink, PageBlock, PageContent,
    SocialLink,
};
pub use story::{RawStory, Story};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
