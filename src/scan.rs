//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory and produces a
//! structured manifest that subsequent stages consume.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── gallery.toml                 # [[photo]] entries
//! ├── videos.toml                  # [[video]] entries
//! ├── programs.toml                # [[program]] carousel slides
//! ├── testimonials.toml            # [[testimonial]] marquee cards
//! ├── sections/                    # Markdown text sections
//! │   ├── about.md                 # File stem = section id
//! │   ├── admissions.md
//! │   └── privacy.md
//! └── assets/                      # Copied verbatim to the output
//! ```
//!
//! Every content file is optional. A missing file yields an empty list and
//! the matching page section is left out.
//!
//! ## Content files
//!
//! ```toml
//! # gallery.toml
//! [[photo]]
//! category = "Sports"
//! caption = "Annual sports day"
//! src = "assets/gallery/sports-day.jpg"   # or an https:// URL
//! featured = true
//!
//! # videos.toml
//! [[video]]
//! title = "Campus Tour"
//! src = "https://youtu.be/GK6tGFjCOAM"
//! ```
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - Unknown keys in any content file are rejected
//! - Every photo belongs to one of the configured gallery categories
//! - Ratings are between 1 and 5
//! - Section files are named after a text section (`about.md`, `privacy.md`, ...)

use crate::anchors::SectionId;
use crate::config::{self, SiteConfig};
use crate::gallery::{CategoryFilter, GalleryError};
use crate::marquee::MAX_RATING;
use crate::metadata;
use crate::types::{MediaItem, Program, Testimonial, TextSection, VideoEntry};
use crate::video::VideoKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const GALLERY_FILE: &str = "gallery.toml";
pub const VIDEOS_FILE: &str = "videos.toml";
pub const PROGRAMS_FILE: &str = "programs.toml";
pub const TESTIMONIALS_FILE: &str = "testimonials.toml";
pub const SECTIONS_DIR: &str = "sections";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Photo {id}: {source}")]
    Category { id: u32, source: GalleryError },
    #[error("Testimonial from {name}: rating {rating} is outside 1-5")]
    InvalidRating { name: String, rating: u8 },
    #[error("Not a text section: {0} (expected one of whyus, about, admissions, privacy, terms, cookies, disclosure)")]
    UnknownSection(PathBuf),
    #[error("Section {id} is defined twice: {path}")]
    DuplicateSection { id: SectionId, path: PathBuf },
}

/// Manifest output from the scan stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub photos: Vec<MediaItem>,
    pub videos: Vec<VideoEntry>,
    pub programs: Vec<Program>,
    pub testimonials: Vec<Testimonial>,
    pub sections: Vec<TextSection>,
    pub config: SiteConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GalleryFile {
    photo: Vec<RawPhoto>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPhoto {
    category: String,
    #[serde(default)]
    caption: String,
    src: String,
    #[serde(default)]
    featured: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct VideosFile {
    video: Vec<RawVideo>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVideo {
    title: String,
    src: String,
    #[serde(default)]
    kind: VideoKind,
    thumbnail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ProgramsFile {
    program: Vec<Program>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TestimonialsFile {
    testimonial: Vec<Testimonial>,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    let gallery: GalleryFile = read_content_file(&root.join(GALLERY_FILE))?;
    let photos = build_photos(gallery.photo, &config.gallery.categories)?;

    let videos: VideosFile = read_content_file(&root.join(VIDEOS_FILE))?;
    let videos = build_videos(videos.video);

    let programs: ProgramsFile = read_content_file(&root.join(PROGRAMS_FILE))?;

    let testimonials: TestimonialsFile = read_content_file(&root.join(TESTIMONIALS_FILE))?;
    for t in &testimonials.testimonial {
        if !(1..=MAX_RATING).contains(&t.rating) {
            return Err(ScanError::InvalidRating {
                name: t.name.clone(),
                rating: t.rating,
            });
        }
    }

    let sections = parse_sections(&root.join(SECTIONS_DIR))?;

    Ok(Manifest {
        photos,
        videos,
        programs: programs.program,
        testimonials: testimonials.testimonial,
        sections,
        config,
    })
}

/// Parse a content TOML file, or return the empty default if it is absent.
fn read_content_file<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ScanError> {
    if !path.exists() {
        return Ok(T::default());
    }
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| ScanError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Number photos in file order and check each against the category set.
///
/// Categories are matched case-insensitively and stored in their configured
/// spelling, so filtering can compare exactly.
fn build_photos(raw: Vec<RawPhoto>, categories: &[String]) -> Result<Vec<MediaItem>, ScanError> {
    raw.into_iter()
        .zip(1..)
        .map(|(photo, id)| {
            let category = match CategoryFilter::parse(&photo.category, categories) {
                Ok(CategoryFilter::Only(c)) => c,
                Ok(CategoryFilter::All) => {
                    return Err(ScanError::Category {
                        id,
                        source: GalleryError::UnknownCategory(photo.category),
                    });
                }
                Err(source) => return Err(ScanError::Category { id, source }),
            };
            Ok(MediaItem {
                id,
                category,
                caption: photo.caption.trim().to_string(),
                source_ref: photo.src.trim().to_string(),
                featured: photo.featured,
            })
        })
        .collect()
}

/// Number videos in file order and give each a unique page slug.
fn build_videos(raw: Vec<RawVideo>) -> Vec<VideoEntry> {
    let mut taken = HashSet::new();
    raw.into_iter()
        .zip(1..)
        .map(|(video, id)| {
            let mut slug = metadata::sanitize_slug(&video.title.to_lowercase());
            if slug.is_empty() {
                slug = format!("video-{id}");
            }
            let base = slug.clone();
            let mut attempt = 1;
            while !taken.insert(slug.clone()) {
                slug = match attempt {
                    1 => format!("{base}-{id}"),
                    n => format!("{base}-{id}-{n}"),
                };
                attempt += 1;
            }
            VideoEntry {
                id,
                title: video.title.trim().to_string(),
                slug,
                source_url: video.src.trim().to_string(),
                kind: video.kind,
                thumbnail: video.thumbnail,
            }
        })
        .collect()
}

/// Parse every markdown file in `sections/` into a text section.
///
/// The file stem names the section. The first `# heading` becomes the title,
/// falling back to the section's default title.
fn parse_sections(dir: &Path) -> Result<Vec<TextSection>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut md_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();
    md_files.sort();

    let mut sections = Vec::new();
    let mut seen = HashSet::new();
    for md_path in md_files {
        let id = md_path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.to_lowercase().parse::<SectionId>().ok())
            .filter(|id| id.is_text_section())
            .ok_or_else(|| ScanError::UnknownSection(md_path.clone()))?;
        if !seen.insert(id) {
            return Err(ScanError::DuplicateSection { id, path: md_path });
        }

        let content = fs::read_to_string(&md_path)?;
        let (heading, body) = metadata::split_title(&content);
        let title = metadata::resolve(&[heading, Some(id.default_title())])
            .unwrap_or_else(|| id.default_title().to_string());

        sections.push(TextSection { id, title, body });
    }

    sections.sort_by_key(|s| s.id);
    Ok(sections)
}
