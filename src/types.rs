//! Content entities shared across all pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → resolve →
//! generate) and must stay identical across the three modules. All of them
//! are load-time data: nothing here is created or mutated while the site is
//! being viewed.

use crate::anchors::SectionId;
use crate::video::VideoKind;
use serde::{Deserialize, Serialize};

/// A gallery photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// 1-based position in `gallery.toml`, unique by construction.
    pub id: u32,
    /// One of the configured gallery categories.
    pub category: String,
    pub caption: String,
    /// Local path relative to the content root, or a remote URL.
    pub source_ref: String,
    /// Featured photos span two grid cells.
    #[serde(default)]
    pub featured: bool,
}

impl AsRef<MediaItem> for MediaItem {
    fn as_ref(&self) -> &MediaItem {
        self
    }
}

/// A video card in the video showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: u32,
    pub title: String,
    /// File stem of the player page (`videos/{slug}.html`).
    pub slug: String,
    pub source_url: String,
    pub kind: VideoKind,
    /// Explicit thumbnail. Required for hosted videos, optional for YouTube.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A slide in the programs carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Program {
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<String>,
    /// CSS color used for the category badge and bullet icons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// A parent or student quote shown in the marquee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// 1 to 5 stars.
    pub rating: u8,
}

/// A markdown-backed text section (why us, about, admissions, legal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSection {
    pub id: SectionId,
    /// First `# heading` of the file, or the section's default title.
    pub title: String,
    /// Markdown body with the title heading removed.
    pub body: String,
}

/// Outcome of resolving an image reference against the content directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedImage {
    /// Path or URL to put in `src`.
    pub src: String,
    /// Pixel dimensions, known only for local images that decoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<(u32, u32)>,
    /// True when `src` is the placeholder standing in for a broken source.
    #[serde(default)]
    pub fallback: bool,
}
