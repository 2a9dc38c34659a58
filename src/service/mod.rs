pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Thumbnail URL derived from a track id when no explicit image is set.
const DERIVED_IMAGE_PREFIX: &str = "https://img.youtube.com/vi/";
const DERIVED_IMAGE_SUFFIX: &str = "/hqdefault.jpg";

/// A song candidate or playlist entry.
///
/// Tracks are immutable value records passed by copy between components;
/// the playlist store owns its own copies and hands out clones. The `url`
/// is present only once the track has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Stable external identifier, unique within the playlist.
    pub id: String,
    pub title: String,
    /// Playable URL, filled in by a successful resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Explicit artwork URL; when absent one is derived from `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Track {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: None,
            image: None,
        }
    }

    /// Artwork URL for display: the explicit image if set, otherwise the
    /// deterministic thumbnail derived from the track id.
    pub fn display_image(&self) -> String {
        match self.image {
            Some(ref image) => image.clone(),
            None => format!("{DERIVED_IMAGE_PREFIX}{}{DERIVED_IMAGE_SUFFIX}", self.id),
        }
    }

    /// Copy of this track with its resolved playable URL filled in.
    pub fn with_url(&self, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..self.clone()
        }
    }
}

/// The backend a player searches against and resolves tracks through.
///
/// Both calls are plain request/response. There is no cancellation signal:
/// an in-flight call always runs to completion, and a stale result is
/// dropped by the caller rather than aborted here.
#[async_trait]
pub trait MusicBackend: Send + Sync {
    /// Search for candidate tracks matching a text query.
    async fn search(&self, query: &str) -> Result<Vec<Track>>;

    /// Resolve a track id into a playable URL.
    async fn resolve(&self, id: &str) -> Result<String>;
}

pub use http::HttpBackend;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_image_prefers_explicit_image() {
        let mut track = Track::new("abc123", "Some Song");
        track.image = Some("https://example.com/cover.jpg".to_string());

        assert_eq!(track.display_image(), "https://example.com/cover.jpg");
    }

    #[test]
    fn test_display_image_derives_from_id() {
        let track = Track::new("abc123", "Some Song");

        assert_eq!(
            track.display_image(),
            "https://img.youtube.com/vi/abc123/hqdefault.jpg"
        );
    }

    #[test]
    fn test_with_url_keeps_other_fields() {
        let mut track = Track::new("abc123", "Some Song");
        track.image = Some("poster.jpg".to_string());

        let resolved = track.with_url("https://cdn.example.com/abc123.mp3");

        assert_eq!(resolved.id, "abc123");
        assert_eq!(resolved.title, "Some Song");
        assert_eq!(resolved.image.as_deref(), Some("poster.jpg"));
        assert_eq!(
            resolved.url.as_deref(),
            Some("https://cdn.example.com/abc123.mp3")
        );
        // the original is untouched
        assert!(track.url.is_none());
    }

    #[test]
    fn test_track_serialization_skips_absent_fields() {
        let track = Track::new("abc123", "Some Song");
        let serialized = toml::to_string_pretty(&track).unwrap();

        assert!(serialized.contains("id = \"abc123\""));
        assert!(!serialized.contains("url"));
        assert!(!serialized.contains("image"));
    }
}
