//! Asset resolution.
//!
//! Stage 2 of the build pipeline. Takes the manifest from the scan stage and
//! decides, for every image and video the page will show, what the browser
//! will actually load.
//!
//! ## Images
//!
//! Each image reference is probed once:
//!
//! | Source | Status | Rendered as |
//! |--------|--------|-------------|
//! | `https://…` | [`AssetStatus::Remote`] | the URL, with a runtime `onerror` placeholder swap |
//! | local file that decodes | [`AssetStatus::Found`] | the path, with `width`/`height` |
//! | local file that is absent | [`AssetStatus::Missing`] | the placeholder |
//! | local file that fails to decode | [`AssetStatus::Unreadable`] | the placeholder |
//!
//! A broken image never fails the build. The fallback is applied per image,
//! so one broken photo does not affect the others.
//!
//! ## Videos
//!
//! YouTube entries go through [`crate::video::resolve`]. An entry whose URL
//! yields no valid id is kept: its card and player page show a "not found"
//! state instead of an embed. Hosted entries are playable when their file
//! exists (or is remote).
//!
//! ## Parallel Processing
//!
//! Local images are probed in parallel using [rayon](https://docs.rs/rayon),
//! reading only as much of each file as needed to learn its dimensions.

use crate::config::SiteConfig;
use crate::gallery::apply_fallback;
use crate::scan::Manifest;
use crate::types::{MediaItem, Program, ResolvedImage, Testimonial, TextSection, VideoEntry};
use crate::video::{self, VideoDetails, VideoKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What probing an image reference found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Remote,
    Found { width: u32, height: u32 },
    Missing,
    Unreadable,
}

impl AssetStatus {
    pub fn is_broken(self) -> bool {
        matches!(self, Self::Missing | Self::Unreadable)
    }
}

/// Progress events emitted while resolving.
///
/// Sent through an optional channel so the CLI can print progress as it
/// happens. The library itself never prints.
#[derive(Debug, Clone)]
pub enum ResolveEvent {
    /// A group of images is about to be probed.
    GroupStarted { label: String, count: usize },
    /// One image reference was probed.
    ImageResolved {
        index: usize,
        title: String,
        source: String,
        status: AssetStatus,
    },
    /// One video entry was resolved.
    VideoResolved {
        index: usize,
        title: String,
        video_id: Option<String>,
        playable: bool,
    },
}

/// A gallery photo with its final image source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPhoto {
    pub item: MediaItem,
    pub image: ResolvedImage,
}

impl AsRef<MediaItem> for ResolvedPhoto {
    fn as_ref(&self) -> &MediaItem {
        &self.item
    }
}

/// A video with its derived player and thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedVideo {
    pub entry: VideoEntry,
    pub details: VideoDetails,
    pub thumbnail: ResolvedImage,
    /// False when the player page should show the "not found" state.
    pub playable: bool,
}

/// A carousel slide with its final image source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedProgram {
    pub program: Program,
    pub image: ResolvedImage,
}

/// Output manifest of the resolve stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedManifest {
    pub photos: Vec<ResolvedPhoto>,
    pub videos: Vec<ResolvedVideo>,
    pub programs: Vec<ResolvedProgram>,
    pub testimonials: Vec<Testimonial>,
    pub sections: Vec<TextSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_poster: Option<ResolvedImage>,
    pub config: SiteConfig,
}

pub fn is_remote(src: &str) -> bool {
    src.starts_with("https://") || src.starts_with("http://") || src.starts_with("//")
}

/// Probe an image reference relative to the content root.
///
/// Only the image header is read.
pub fn probe(source_root: &Path, src: &str) -> AssetStatus {
    if is_remote(src) {
        return AssetStatus::Remote;
    }
    let path = source_root.join(src);
    if !path.is_file() {
        return AssetStatus::Missing;
    }
    let dimensions = image::ImageReader::open(&path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image::ImageError::IoError)
        .and_then(|reader| reader.into_dimensions());
    match dimensions {
        Ok((width, height)) => AssetStatus::Found { width, height },
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "image did not decode");
            AssetStatus::Unreadable
        }
    }
}

/// Probe many references in parallel, returning statuses in input order.
fn probe_all(source_root: &Path, refs: &[&str]) -> Vec<AssetStatus> {
    refs.par_iter().map(|src| probe(source_root, src)).collect()
}

pub fn resolve(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
    progress: Option<Sender<ResolveEvent>>,
) -> Result<ResolvedManifest, ResolveError> {
    let manifest_content = std::fs::read_to_string(manifest_path)?;
    let input: Manifest = serde_json::from_str(&manifest_content)?;

    let resolved = resolve_manifest(input, source_root, progress.as_ref());

    std::fs::create_dir_all(output_dir)?;
    let json = serde_json::to_string_pretty(&resolved)?;
    std::fs::write(output_dir.join("manifest.json"), json)?;
    Ok(resolved)
}

/// Resolve every asset reference in a scan manifest.
pub fn resolve_manifest(
    input: Manifest,
    source_root: &Path,
    progress: Option<&Sender<ResolveEvent>>,
) -> ResolvedManifest {
    let emit = |event: ResolveEvent| {
        if let Some(tx) = progress {
            tx.send(event).ok();
        }
    };
    let placeholder = input.config.gallery.placeholder.clone();

    // Every distinct local or remote image reference, probed once.
    let mut refs: Vec<&str> = input
        .photos
        .iter()
        .map(|p| p.source_ref.as_str())
        .chain(input.programs.iter().map(|p| p.image.as_str()))
        .chain(input.videos.iter().filter_map(|v| v.thumbnail.as_deref()))
        .chain(input.config.hero.poster.as_deref())
        .collect();
    refs.sort_unstable();
    refs.dedup();
    let statuses: HashMap<String, AssetStatus> = refs
        .iter()
        .map(|src| src.to_string())
        .zip(probe_all(source_root, &refs))
        .collect();

    let resolve_image = |group: &str, title: &str, src: &str| -> ResolvedImage {
        let status = statuses
            .get(src)
            .copied()
            .unwrap_or(AssetStatus::Missing);
        if status.is_broken() {
            tracing::warn!(group, title, src, ?status, "image unavailable, using placeholder");
        }
        apply_fallback(src, &status, &placeholder)
    };

    emit(ResolveEvent::GroupStarted {
        label: "Gallery".to_string(),
        count: input.photos.len(),
    });
    let photos: Vec<ResolvedPhoto> = input
        .photos
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let image = resolve_image("gallery", &item.caption, &item.source_ref);
            emit(ResolveEvent::ImageResolved {
                index: i + 1,
                title: item.caption.clone(),
                source: item.source_ref.clone(),
                status: statuses
                    .get(item.source_ref.as_str())
                    .copied()
                    .unwrap_or(AssetStatus::Missing),
            });
            ResolvedPhoto { item, image }
        })
        .collect();

    emit(ResolveEvent::GroupStarted {
        label: "Programs".to_string(),
        count: input.programs.len(),
    });
    let programs: Vec<ResolvedProgram> = input
        .programs
        .into_iter()
        .enumerate()
        .map(|(i, program)| {
            let image = resolve_image("programs", &program.title, &program.image);
            emit(ResolveEvent::ImageResolved {
                index: i + 1,
                title: program.title.clone(),
                source: program.image.clone(),
                status: statuses
                    .get(program.image.as_str())
                    .copied()
                    .unwrap_or(AssetStatus::Missing),
            });
            ResolvedProgram { program, image }
        })
        .collect();

    emit(ResolveEvent::GroupStarted {
        label: "Videos".to_string(),
        count: input.videos.len(),
    });
    let videos: Vec<ResolvedVideo> = input
        .videos
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let (details, playable) = match entry.kind {
                VideoKind::Youtube => {
                    let details = video::resolve(&entry.source_url);
                    let valid = details.valid;
                    (details, valid)
                }
                VideoKind::Hosted => {
                    let exists = is_remote(&entry.source_url)
                        || source_root.join(&entry.source_url).is_file();
                    (VideoDetails::default(), exists)
                }
            };
            if !playable {
                tracing::warn!(title = %entry.title, src = %entry.source_url, "video source not found");
            }

            let thumbnail = match (&entry.thumbnail, &details.thumbnail_url) {
                (Some(explicit), _) => resolve_image("videos", &entry.title, explicit),
                (None, Some(derived)) => apply_fallback(derived, &AssetStatus::Remote, &placeholder),
                (None, None) => apply_fallback("", &AssetStatus::Missing, &placeholder),
            };

            emit(ResolveEvent::VideoResolved {
                index: i + 1,
                title: entry.title.clone(),
                video_id: details.video_id.clone(),
                playable,
            });
            ResolvedVideo {
                entry,
                details,
                thumbnail,
                playable,
            }
        })
        .collect();

    let hero_poster = input
        .config
        .hero
        .poster
        .as_deref()
        .map(|src| resolve_image("hero", "poster", src));

    ResolvedManifest {
        photos,
        videos,
        programs,
        testimonials: input.testimonials,
        sections: input.sections,
        hero_poster,
        config: input.config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;
    use crate::test_helpers::*;
    use std::fs;
    use tempfile::TempDir;

    // =========================================================================
    // probe
    // =========================================================================

    #[test]
    fn probe_remote_is_not_touched() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            probe(tmp.path(), "https://images.example.com/a.jpg"),
            AssetStatus::Remote
        );
        assert_eq!(probe(tmp.path(), "//cdn.example.com/a.jpg"), AssetStatus::Remote);
    }

    #[test]
    fn probe_missing_file() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(probe(tmp.path(), "assets/nope.jpg"), AssetStatus::Missing);
    }

    #[test]
    fn probe_reads_dimensions() {
        let tmp = TempDir::new().unwrap();
        write_test_png(&tmp.path().join("assets/a.png"), 40, 30);
        assert_eq!(
            probe(tmp.path(), "assets/a.png"),
            AssetStatus::Found {
                width: 40,
                height: 30
            }
        );
    }

    #[test]
    fn probe_garbage_file_is_unreadable() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("broken.jpg"), b"not an image at all").unwrap();
        assert_eq!(probe(tmp.path(), "broken.jpg"), AssetStatus::Unreadable);
    }

    #[test]
    fn probe_all_keeps_order() {
        let tmp = TempDir::new().unwrap();
        write_test_png(&tmp.path().join("a.png"), 10, 10);
        let statuses = probe_all(tmp.path(), &["missing.png", "a.png", "https://x.test/b.png"]);
        assert_eq!(
            statuses,
            vec![
                AssetStatus::Missing,
                AssetStatus::Found {
                    width: 10,
                    height: 10
                },
                AssetStatus::Remote
            ]
        );
    }

    // =========================================================================
    // resolve_manifest
    // =========================================================================

    fn resolved_fixtures() -> (TempDir, ResolvedManifest) {
        let tmp = setup_fixtures();
        let manifest = scan::scan(tmp.path()).unwrap();
        let resolved = resolve_manifest(manifest, tmp.path(), None);
        (tmp, resolved)
    }

    #[test]
    fn present_photo_keeps_path_and_dimensions() {
        let (_tmp, resolved) = resolved_fixtures();
        let photo = find_photo(&resolved, "Science exhibition");
        assert_eq!(photo.image.src, photo.item.source_ref);
        assert!(photo.image.dimensions.is_some());
        assert!(!photo.image.fallback);
    }

    #[test]
    fn missing_photo_uses_placeholder() {
        let (_tmp, resolved) = resolved_fixtures();
        let photo = find_photo(&resolved, "Library corner");
        assert!(photo.image.fallback);
        assert_eq!(photo.image.src, resolved.config.gallery.placeholder);
        assert_eq!(photo.image.dimensions, None);
    }

    #[test]
    fn fallback_is_per_item() {
        let (_tmp, resolved) = resolved_fixtures();
        let broken = resolved.photos.iter().filter(|p| p.image.fallback).count();
        assert_eq!(broken, 1);
        assert!(resolved.photos.len() > broken);
    }

    #[test]
    fn remote_photo_passes_through() {
        let (_tmp, resolved) = resolved_fixtures();
        let remote = resolved
            .photos
            .iter()
            .find(|p| is_remote(&p.item.source_ref))
            .expect("fixtures include a remote photo");
        assert_eq!(remote.image.src, remote.item.source_ref);
        assert!(!remote.image.fallback);
    }

    #[test]
    fn youtube_videos_resolve() {
        let (_tmp, resolved) = resolved_fixtures();
        let tour = find_resolved_video(&resolved, "campus-tour");
        assert!(tour.playable);
        assert_eq!(tour.details.video_id.as_deref(), Some("GK6tGFjCOAM"));
        assert_eq!(
            tour.thumbnail.src,
            "https://img.youtube.com/vi/GK6tGFjCOAM/maxresdefault.jpg"
        );
    }

    #[test]
    fn unresolvable_video_is_kept_but_not_playable() {
        let (_tmp, resolved) = resolved_fixtures();
        let broken = find_resolved_video(&resolved, "sports-day-highlights");
        assert!(!broken.playable);
        assert!(!broken.details.valid);
        assert!(broken.thumbnail.fallback);
    }

    #[test]
    fn hosted_video_checks_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(scan::VIDEOS_FILE),
            "[[video]]\ntitle = \"Assembly\"\nsrc = \"assets/assembly.mp4\"\nkind = \"hosted\"\n",
        )
        .unwrap();
        let manifest = scan::scan(tmp.path()).unwrap();
        let resolved = resolve_manifest(manifest.clone(), tmp.path(), None);
        assert!(!resolved.videos[0].playable);

        fs::create_dir_all(tmp.path().join("assets")).unwrap();
        fs::write(tmp.path().join("assets/assembly.mp4"), b"\0\0\0\x18ftypmp42").unwrap();
        let resolved = resolve_manifest(manifest, tmp.path(), None);
        assert!(resolved.videos[0].playable);
        assert!(resolved.videos[0].thumbnail.fallback);
    }

    #[test]
    fn events_cover_every_item() {
        let tmp = setup_fixtures();
        let manifest = scan::scan(tmp.path()).unwrap();
        let expected_images = manifest.photos.len() + manifest.programs.len();
        let expected_videos = manifest.videos.len();

        let (tx, rx) = std::sync::mpsc::channel();
        resolve_manifest(manifest, tmp.path(), Some(&tx));
        drop(tx);
        let events: Vec<ResolveEvent> = rx.into_iter().collect();

        let images = events
            .iter()
            .filter(|e| matches!(e, ResolveEvent::ImageResolved { .. }))
            .count();
        let videos = events
            .iter()
            .filter(|e| matches!(e, ResolveEvent::VideoResolved { .. }))
            .count();
        assert_eq!(images, expected_images);
        assert_eq!(videos, expected_videos);
    }

    #[test]
    fn resolve_writes_manifest() {
        let tmp = setup_fixtures();
        let manifest = scan::scan(tmp.path()).unwrap();
        let manifest_path = tmp.path().join("scan.json");
        fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();

        let out = tmp.path().join("resolved");
        let resolved = resolve(&manifest_path, tmp.path(), &out, None).unwrap();
        let written: ResolvedManifest =
            serde_json::from_str(&fs::read_to_string(out.join("manifest.json")).unwrap()).unwrap();
        assert_eq!(written.photos, resolved.photos);
        assert_eq!(written.videos, resolved.videos);
    }
}
