//! Shared test utilities for the school-site test suite.
//!
//! Provides fixture setup, lookup helpers and generated image assets that
//! work with scan and resolve stage data.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let video = find_video(&manifest, "campus-tour");
//! assert_eq!(video.title, "Campus Tour");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::anchors::SectionId;
use crate::resolve::{ResolvedManifest, ResolvedPhoto, ResolvedVideo};
use crate::scan::Manifest;
use crate::types::{TextSection, VideoEntry};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a solid-color PNG, creating parent directories.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::from_pixel(width, height, image::Rgb([147, 51, 234]))
        .save(path)
        .unwrap();
}

// =========================================================================
// Manifest lookups: panic with the available keys on a miss
// =========================================================================

/// Find a scanned video by slug. Panics if not found.
pub fn find_video<'a>(manifest: &'a Manifest, slug: &str) -> &'a VideoEntry {
    manifest
        .videos
        .iter()
        .find(|v| v.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.videos.iter().map(|v| v.slug.as_str()).collect();
            panic!("video '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a text section by id. Panics if not found.
pub fn find_section(manifest: &Manifest, id: SectionId) -> &TextSection {
    manifest
        .sections
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| {
            let ids: Vec<&str> = manifest.sections.iter().map(|s| s.id.as_str()).collect();
            panic!("section '{id}' not found. Available: {ids:?}")
        })
}

/// Find a resolved photo by caption. Panics if not found.
pub fn find_photo<'a>(manifest: &'a ResolvedManifest, caption: &str) -> &'a ResolvedPhoto {
    manifest
        .photos
        .iter()
        .find(|p| p.item.caption == caption)
        .unwrap_or_else(|| {
            let captions: Vec<&str> = manifest
                .photos
                .iter()
                .map(|p| p.item.caption.as_str())
                .collect();
            panic!("photo '{caption}' not found. Available: {captions:?}")
        })
}

/// Find a resolved video by slug. Panics if not found.
pub fn find_resolved_video<'a>(manifest: &'a ResolvedManifest, slug: &str) -> &'a ResolvedVideo {
    manifest
        .videos
        .iter()
        .find(|v| v.entry.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest
                .videos
                .iter()
                .map(|v| v.entry.slug.as_str())
                .collect();
            panic!("video '{slug}' not found. Available: {slugs:?}")
        })
}

// =========================================================================
// HTML assertions
// =========================================================================

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count_occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// The slice of `html` inside the first element carrying `marker`
/// (e.g. `data-filter="sports"`), up to the next `marker_end`.
pub fn section_between<'a>(html: &'a str, marker: &str, marker_end: &str) -> &'a str {
    let start = html
        .find(marker)
        .unwrap_or_else(|| panic!("marker '{marker}' not found in html"));
    let rest = &html[start..];
    let end = rest[marker.len()..]
        .find(marker_end)
        .map(|i| i + marker.len())
        .unwrap_or(rest.len());
    &rest[..end]
}
