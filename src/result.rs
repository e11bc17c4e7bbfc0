//! Result types for metadata extraction output.

use serde::{Deserialize, Serialize};

/// Metadata extracted from a web page for link preview rendering.
///
/// All fields are optional as metadata may not be present on all pages.
/// Consumers must treat absence as "unknown", never as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page title.
    pub title: Option<String>,

    /// Page description (og:description or meta description).
    pub description: Option<String>,

    /// Site name (e.g., "New York Times").
    pub site_name: Option<String>,

    /// URL of the site favicon.
    pub site_icon_url: Option<String>,

    /// Canonical URL of the page (og:url, falling back to the request URL).
    pub url: Option<String>,

    /// Page type classification (og:type - article, video, etc.).
    pub page_type: Option<String>,

    /// Video stream URL (og:video).
    pub video_url: Option<String>,

    /// MIME type of the video stream (og:video:type).
    pub video_type: Option<String>,

    /// Confirmed thumbnail URL. Mutually exclusive with `thumbnail_data`
    /// as the authoritative thumbnail source.
    pub thumbnail_url: Option<String>,

    /// Raw thumbnail bytes supplied by the caller (e.g., a capture from an
    /// embedded browser). Mutually exclusive with `thumbnail_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_data: Option<Vec<u8>>,
}

impl PageMetadata {
    /// Whether any thumbnail source is present.
    #[must_use]
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail_url.is_some() || self.thumbnail_data.is_some()
    }
}
