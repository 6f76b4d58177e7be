//! Video URL resolution.
//!
//! Turns whatever URL a site editor pasted for a YouTube video into the three
//! things the page needs: the 11-character video id, an embeddable player URL
//! and a thumbnail URL. The common URL shapes are all accepted:
//!
//! ```text
//! https://www.youtube.com/watch?v=GK6tGFjCOAM
//! https://www.youtube.com/watch?v=Wtv-JjlTjIA&list=RDWtv-JjlTjIA
//! https://youtu.be/GK6tGFjCOAM
//! https://www.youtube.com/embed/GK6tGFjCOAM
//! https://www.youtube.com/v/GK6tGFjCOAM
//! ```
//!
//! A URL that does not yield an 11-character id is not an error. The result
//! simply comes back with `valid == false` and every derived field `None`,
//! and the page renders a "video source not found" player instead.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Length of a YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

/// The identifier follows the last recognized marker and runs until the next
/// `#`, `&` or `?`.
static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("video id pattern is valid")
});

/// Where a video is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    /// A YouTube URL, resolved with [`resolve`].
    #[default]
    Youtube,
    /// A direct video file played with a `<video>` element.
    Hosted,
}

/// Values derived from a video URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoDetails {
    pub video_id: Option<String>,
    pub embed_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub valid: bool,
}

/// Player endpoint for an id, with autoplay enabled.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1")
}

/// Maximum-resolution thumbnail for an id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}

/// Extract the video id from a URL, if it has one of exactly 11 characters.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .filter(|id| id.len() == VIDEO_ID_LEN)
}

/// Resolve a URL into its embeddable player and thumbnail.
pub fn resolve(url: &str) -> VideoDetails {
    match extract_video_id(url) {
        Some(id) => VideoDetails {
            video_id: Some(id.to_string()),
            embed_url: Some(embed_url(id)),
            thumbnail_url: Some(thumbnail_url(id)),
            valid: true,
        },
        None => VideoDetails::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url() {
        let details = resolve("https://www.youtube.com/watch?v=GK6tGFjCOAM");
        assert!(details.valid);
        assert_eq!(details.video_id.as_deref(), Some("GK6tGFjCOAM"));
    }

    #[test]
    fn short_url() {
        let details = resolve("https://youtu.be/GK6tGFjCOAM");
        assert!(details.valid);
        assert_eq!(details.video_id.as_deref(), Some("GK6tGFjCOAM"));
    }

    #[test]
    fn embed_url_shape() {
        let details = resolve("https://www.youtube.com/embed/GK6tGFjCOAM");
        assert!(details.valid);
        assert_eq!(details.video_id.as_deref(), Some("GK6tGFjCOAM"));
    }

    #[test]
    fn legacy_v_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/v/GK6tGFjCOAM"),
            Some("GK6tGFjCOAM")
        );
    }

    #[test]
    fn user_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/u/w/GK6tGFjCOAM"),
            Some("GK6tGFjCOAM")
        );
    }

    #[test]
    fn id_stops_at_query_separator() {
        let details =
            resolve("https://www.youtube.com/watch?v=Wtv-JjlTjIA&list=RDWtv-JjlTjIA&start_radio=1");
        assert_eq!(details.video_id.as_deref(), Some("Wtv-JjlTjIA"));
    }

    #[test]
    fn id_stops_at_fragment() {
        assert_eq!(
            extract_video_id("https://youtu.be/e4VyhryO_0c#t=30"),
            Some("e4VyhryO_0c")
        );
    }

    #[test]
    fn ampersand_v_parameter() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?feature=share&v=rV93gM0aEpk"),
            Some("rV93gM0aEpk")
        );
    }

    #[test]
    fn derived_urls_use_fixed_templates() {
        let details = resolve("https://youtu.be/GK6tGFjCOAM");
        assert_eq!(
            details.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/GK6tGFjCOAM?autoplay=1")
        );
        assert_eq!(
            details.thumbnail_url.as_deref(),
            Some("https://img.youtube.com/vi/GK6tGFjCOAM/maxresdefault.jpg")
        );
    }

    #[test]
    fn non_video_url_is_invalid() {
        let details = resolve("https://example.com/about");
        assert!(!details.valid);
        assert_eq!(details.video_id, None);
        assert_eq!(details.embed_url, None);
        assert_eq!(details.thumbnail_url, None);
    }

    #[test]
    fn wrong_length_id_is_invalid() {
        assert!(!resolve("https://youtu.be/short").valid);
        assert!(!resolve("https://youtu.be/GK6tGFjCOAMxx").valid);
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(resolve(""), VideoDetails::default());
    }

    #[test]
    fn video_kind_defaults_to_youtube() {
        assert_eq!(VideoKind::default(), VideoKind::Youtube);
        let kind: VideoKind = serde_json::from_str(r#""hosted""#).unwrap();
        assert_eq!(kind, VideoKind::Hosted);
    }
}
