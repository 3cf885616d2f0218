//! Concrete content shapes
//!
//! The record bodies the site renders. Every field tolerates absence via
//! `#[serde(default)]` so that any bundled fixture or remote payload can
//! materialize into any requested shape without failing retrieval.

use crate::shape::ContentShape;
use serde::{Deserialize, Serialize};

/// A standard page record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    /// Editor-assigned block id
    #[serde(rename = "_uid")]
    pub uid: String,
    /// Component discriminant, `"page"` for live records
    pub component: String,
    /// Page title
    pub title: String,
    /// Nested body blocks rendered in order
    pub body: Vec<PageBlock>,
}

impl ContentShape for PageContent {
    const COMPONENT: &'static str = "page";
}

/// One block inside a page body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBlock {
    /// Editor-assigned block id
    #[serde(rename = "_uid")]
    pub uid: String,
    /// Component discriminant for the rendering layer
    pub component: String,
    /// Optional headline
    pub headline: String,
    /// Optional rich-text body, kept as raw JSON for the renderer
    pub text: serde_json::Value,
}

/// Site-wide settings, always retrieved through the reserved settings key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Editor-assigned block id
    #[serde(rename = "_uid")]
    pub uid: String,
    /// Component discriminant, `"site_settings"` for live records
    pub component: String,
    /// Site title shown in the header and page metadata
    pub site_title: String,
    /// Primary navigation
    pub navigation: Vec<NavLink>,
    /// Footer link columns, each a labelled list of links
    pub footer_columns: Vec<FooterColumn>,
    /// Social profile links
    pub social_links: Vec<SocialLink>,
    /// Contact details
    pub contact: ContactInfo,
    /// Feature toggles
    pub features: FeatureFlags,
}

impl ContentShape for GlobalSettings {
    const COMPONENT: &'static str = "site_settings";
}

/// A navigation entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLink {
    /// Link label
    pub label: String,
    /// Route slug the link targets
    pub slug: String,
}

/// A labelled footer column of links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterColumn {
    /// Column heading
    pub heading: String,
    /// Links in this column
    pub links: Vec<NavLink>,
}

/// A social profile link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Platform name
    pub platform: String,
    /// Profile URL
    pub url: String,
}

/// Contact details shown in the footer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
}

/// Feature toggles controlled from the CMS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show the newsletter signup form
    pub newsletter: bool,
    /// Show the blog section
    pub blog: bool,
}
