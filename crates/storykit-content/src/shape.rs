//! Content Shape Trait
//!
//! Defines the interface for content body types a caller can request.
//! The type parameter is a compile-time contract between the call site and
//! the fetcher; runtime schema validation lives upstream and is deliberately
//! not part of this trait.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait for content body shapes
///
/// Implement this for each kind of record the site renders (page, settings,
/// etc.). The bounds guarantee two things the fetch layer relies on:
///
/// - `DeserializeOwned` with a `Default`: any JSON body can be materialized,
///   absent fields filling in with defaults, so retrieval stays total.
/// - `Send + Sync + 'static`: shapes cross async boundaries freely.
///
/// # Example
/// ```rust,ignore
/// #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// #[serde(default)]
/// pub struct PageContent {
///     pub _uid: String,
///     pub component: String,
///     pub title: String,
/// }
///
/// impl ContentShape for PageContent {
///     const COMPONENT: &'static str = "page";
/// }
/// ```
pub trait ContentShape:
    DeserializeOwned + Serialize + Default + Clone + std::fmt::Debug + Send + Sync + 'static
{
    /// Component discriminant as stored in the CMS record
    const COMPONENT: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Teaser {
        component: String,
        headline: String,
    }

    impl ContentShape for Teaser {
        const COMPONENT: &'static str = "teaser";
    }

    #[test]
    fn shape_materializes_with_missing_fields() {
        let teaser: Teaser = serde_json::from_str("{\"headline\":\"hi\"}").unwrap();
        assert_eq!(teaser.headline, "hi");
        assert_eq!(teaser.component, "");
    }

    #[test]
    fn shape_exposes_component_const() {
        assert_eq!(Teaser::COMPONENT, "teaser");
    }
}
