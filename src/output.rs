//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity (photo,
//! video, program, section) leads with its positional index and title, with
//! filesystem paths and URLs shown as indented context lines. The output
//! reads as a content inventory of the site while still letting an editor
//! trace each entry back to the file that declared it.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Photos
//! 001 The Main Historic Building (Campus, featured)
//!     Source: assets/gallery/main-building.png
//!
//! Videos
//! 001 Campus Tour (youtube)
//!     Source: https://youtu.be/GK6tGFjCOAM
//!
//! Sections
//! 001 About Our School
//!     Source: sections/about.md
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Resolve
//!
//! ```text
//! Gallery (8 images)
//!     001 Science exhibition
//!         Source: assets/gallery/science.png
//!         Status: 60x40
//!     006 Library corner
//!         Source: assets/gallery/library.jpg
//!         Status: missing, using placeholder
//! Videos (4 videos)
//!     001 Campus Tour
//!         Video id: GK6tGFjCOAM
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 Home → index.html#home
//! 002 Why Choose Us → index.html#whyus
//!
//! Videos
//! 001 Campus Tour → videos/campus-tour.html
//!
//! Generated 1 page, 12 sections, 4 video pages
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O beyond checking which config files exist.

use crate::anchors::SectionId;
use crate::generate::VIDEOS_DIR;
use crate::resolve::{AssetStatus, ResolveEvent, ResolvedManifest};
use crate::scan::{Manifest, SECTIONS_DIR};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Campus Tour (youtube)
/// 002 About Our School
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) if !d.is_empty() => format!("{} {} ({})", format_index(index), title, d),
        _ => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// First non-blank line of a markdown body, as a one-line preview.
fn preview(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| truncate_desc(line, 60))
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

fn section_title(manifest: &ResolvedManifest, id: SectionId) -> String {
    manifest
        .sections
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.title.clone())
        .unwrap_or_else(|| id.default_title().to_string())
}

fn status_line(status: &AssetStatus) -> String {
    match status {
        AssetStatus::Remote => "remote".to_string(),
        AssetStatus::Found { width, height } => format!("{}x{}", width, height),
        AssetStatus::Missing => "missing, using placeholder".to_string(),
        AssetStatus::Unreadable => "unreadable, using placeholder".to_string(),
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered site content.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Photos".to_string());
    for (i, photo) in manifest.photos.iter().enumerate() {
        let detail = if photo.featured {
            format!("{}, featured", photo.category)
        } else {
            photo.category.clone()
        };
        lines.push(entity_header(i + 1, &photo.caption, Some(&detail)));
        lines.push(format!("{}Source: {}", indent(1), photo.source_ref));
    }

    if !manifest.videos.is_empty() {
        lines.push(String::new());
        lines.push("Videos".to_string());
        for (i, video) in manifest.videos.iter().enumerate() {
            let kind = match video.kind {
                crate::video::VideoKind::Youtube => "youtube",
                crate::video::VideoKind::Hosted => "hosted",
            };
            lines.push(entity_header(i + 1, &video.title, Some(kind)));
            lines.push(format!("{}Source: {}", indent(1), video.source_url));
        }
    }

    if !manifest.programs.is_empty() {
        lines.push(String::new());
        lines.push("Programs".to_string());
        for (i, program) in manifest.programs.iter().enumerate() {
            lines.push(entity_header(i + 1, &program.title, Some(&program.category)));
            lines.push(format!("{}Image: {}", indent(1), program.image));
        }
    }

    if !manifest.testimonials.is_empty() {
        lines.push(String::new());
        lines.push("Testimonials".to_string());
        for (i, t) in manifest.testimonials.iter().enumerate() {
            let detail = format!("{}, {}", t.role, plural(t.rating as usize, "star", "stars"));
            lines.push(entity_header(i + 1, &t.name, Some(&detail)));
            lines.push(format!("{}{}", indent(1), truncate_desc(&t.content, 60)));
        }
    }

    if !manifest.sections.is_empty() {
        lines.push(String::new());
        lines.push("Sections".to_string());
        for (i, section) in manifest.sections.iter().enumerate() {
            lines.push(entity_header(i + 1, &section.title, None));
            lines.push(format!(
                "{}Source: {}/{}.md",
                indent(1),
                SECTIONS_DIR,
                section.id.as_str()
            ));
            if let Some(line) = preview(&section.body) {
                lines.push(format!("{}{}", indent(1), line));
            }
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(crate::generate::ASSETS_DIR).is_dir() {
        lines.push(format!("{}{}/", indent(1), crate::generate::ASSETS_DIR));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Resolve output
// ============================================================================

/// Format a single resolve progress event as display lines.
pub fn format_resolve_event(event: &ResolveEvent) -> Vec<String> {
    match event {
        ResolveEvent::GroupStarted { label, count } => {
            let noun = if label == "Videos" {
                plural(*count, "video", "videos")
            } else {
                plural(*count, "image", "images")
            };
            vec![format!("{} ({})", label, noun)]
        }
        ResolveEvent::ImageResolved {
            index,
            title,
            source,
            status,
        } => vec![
            format!("{}{}", indent(1), entity_header(*index, title, None)),
            format!("{}Source: {}", indent(2), source),
            format!("{}Status: {}", indent(2), status_line(status)),
        ],
        ResolveEvent::VideoResolved {
            index,
            title,
            video_id,
            playable,
        } => {
            let mut lines = vec![format!("{}{}", indent(1), entity_header(*index, title, None))];
            if let Some(id) = video_id {
                lines.push(format!("{}Video id: {}", indent(2), id));
            }
            if !playable {
                lines.push(format!("{}Not playable, page shows not found", indent(2)));
            }
            lines
        }
    }
}

// ============================================================================
// Stage 3: Generate output
// ============================================================================

/// Format generate stage output showing generated HTML files.
///
/// Each entity leads with its positional index and title, followed by `→`
/// and the output path.
pub fn format_generate_output(manifest: &ResolvedManifest) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Home \u{2192} index.html".to_string());

    let sections = crate::generate::rendered_sections(manifest);
    for (i, id) in sections.iter().enumerate() {
        lines.push(format!(
            "{} \u{2192} index.html#{}",
            entity_header(i + 1, &section_title(manifest, *id), None),
            id.as_str()
        ));
    }

    if !manifest.videos.is_empty() {
        lines.push(String::new());
        lines.push("Videos".to_string());
        for (i, video) in manifest.videos.iter().enumerate() {
            let marker = if video.playable { "" } else { " (not found)" };
            lines.push(format!(
                "{}{} \u{2192} {}/{}.html",
                entity_header(i + 1, &video.entry.title, None),
                marker,
                VIDEOS_DIR,
                video.entry.slug
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 page, {}, {}",
        plural(sections.len(), "section", "sections"),
        plural(manifest.videos.len(), "video page", "video pages")
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &ResolvedManifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_manifest;
    use crate::scan::scan;
    use crate::test_helpers::*;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_exact() {
        let text = "a".repeat(40);
        assert_eq!(truncate_desc(&text, 40), text);
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        let expected = format!("{}...", "a".repeat(40));
        assert_eq!(truncate_desc(&text, 40), expected);
    }

    #[test]
    fn truncate_desc_multibyte() {
        assert_eq!(truncate_desc("வணக்கம் பள்ளி", 3), "வணக...");
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn entity_header_with_detail() {
        assert_eq!(
            entity_header(1, "Campus Tour", Some("youtube")),
            "001 Campus Tour (youtube)"
        );
    }

    #[test]
    fn entity_header_without_detail() {
        assert_eq!(entity_header(2, "About", None), "002 About");
        assert_eq!(entity_header(2, "About", Some("")), "002 About");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn preview_skips_blank_lines() {
        assert_eq!(preview("\n\n  First line  \nSecond"), Some("First line".to_string()));
        assert_eq!(preview("   \n"), None);
    }

    // =========================================================================
    // Stage output tests
    // =========================================================================

    #[test]
    fn scan_output_lists_content() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest, tmp.path());

        assert_eq!(lines[0], "Photos");
        assert!(lines.contains(&"001 The Main Historic Building (Campus, featured)".to_string()));
        assert!(lines.contains(&"    Source: sections/about.md".to_string()));
        assert!(lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
    }

    #[test]
    fn resolve_event_for_missing_image() {
        let event = ResolveEvent::ImageResolved {
            index: 6,
            title: "Library corner".to_string(),
            source: "assets/gallery/library.jpg".to_string(),
            status: AssetStatus::Missing,
        };
        assert_eq!(
            format_resolve_event(&event),
            vec![
                "    006 Library corner",
                "        Source: assets/gallery/library.jpg",
                "        Status: missing, using placeholder",
            ]
        );
    }

    #[test]
    fn resolve_event_for_found_image() {
        let event = ResolveEvent::ImageResolved {
            index: 1,
            title: "Science exhibition".to_string(),
            source: "assets/gallery/science.png".to_string(),
            status: AssetStatus::Found {
                width: 60,
                height: 40,
            },
        };
        assert_eq!(format_resolve_event(&event)[2], "        Status: 60x40");
    }

    #[test]
    fn resolve_event_group_header() {
        let event = ResolveEvent::GroupStarted {
            label: "Gallery".to_string(),
            count: 8,
        };
        assert_eq!(format_resolve_event(&event), vec!["Gallery (8 images)"]);
        let event = ResolveEvent::GroupStarted {
            label: "Videos".to_string(),
            count: 1,
        };
        assert_eq!(format_resolve_event(&event), vec!["Videos (1 video)"]);
    }

    #[test]
    fn resolve_event_for_unplayable_video() {
        let event = ResolveEvent::VideoResolved {
            index: 4,
            title: "Sports Day Highlights".to_string(),
            video_id: None,
            playable: false,
        };
        let lines = format_resolve_event(&event);
        assert_eq!(lines[0], "    004 Sports Day Highlights");
        assert!(lines[1].contains("Not playable"));
    }

    #[test]
    fn generate_output_lists_pages() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let resolved = resolve_manifest(manifest, tmp.path(), None);
        let lines = format_generate_output(&resolved);

        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert!(lines.contains(&"001 Campus Tour \u{2192} videos/campus-tour.html".to_string()));
        assert!(
            lines
                .iter()
                .any(|l| l.contains("Sports Day Highlights (not found)"))
        );
        assert!(lines.iter().any(|l| l.ends_with("index.html#about")));
        let summary = lines.last().unwrap();
        assert!(summary.starts_with("Generated 1 page, "));
        assert!(summary.ends_with("4 video pages"));
    }
}
