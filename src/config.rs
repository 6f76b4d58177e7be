//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! cover every key, so a site's `config.toml` only needs the values it wants
//! to change:
//!
//! ```toml
//! [school]
//! name = "Minervaa Vidhya Mandhir"
//!
//! [theme]
//! preset = "playful"
//! ```
//!
//! ## Sections
//!
//! | Section | Controls |
//! |---------|----------|
//! | `[school]` | Name, tagline, contact details, social links |
//! | `[theme]` | Preset and design token overrides (see [`crate::theme`]) |
//! | `[hero]` | Hero headline, background video, call to action |
//! | `[gallery]` | Closed category set, placeholder image |
//! | `[carousel]` | Autoplay interval, stacked-layout breakpoint |
//! | `[marquee]` | Testimonial scroll duration and repetition |
//! | `[navigation]` | Nav bar and footer anchors, scroll offset |
//! | `[contact]` | Form endpoint and acknowledgment text |
//! | `[processing]` | Parallel asset probing |
//!
//! Unknown keys are rejected to catch typos early.

use crate::anchors::{DEFAULT_SCROLL_OFFSET, SectionId};
use crate::carousel::{DEFAULT_AUTOPLAY_INTERVAL, DEFAULT_STACK_BELOW};
use crate::gallery::{ALL_LABEL, CategoryFilter};
use crate::theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub school: SchoolConfig,
    pub theme: ThemeConfig,
    pub hero: HeroConfig,
    pub gallery: GalleryConfig,
    pub carousel: CarouselConfig,
    pub marquee: MarqueeConfig,
    pub navigation: NavigationConfig,
    pub contact: ContactConfig,
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.school.name.trim().is_empty() {
            return Err(ConfigError::Validation("school.name must not be empty".into()));
        }
        if self.gallery.categories.is_empty() {
            return Err(ConfigError::Validation(
                "gallery.categories must not be empty".into(),
            ));
        }
        // Tab ids are slugs, so two labels that slug alike would share one radio.
        let mut seen_labels = HashSet::new();
        let mut seen_slugs = HashSet::from([CategoryFilter::All.slug()]);
        for category in &self.gallery.categories {
            let key = category.trim().to_lowercase();
            let slug = CategoryFilter::Only(category.clone()).slug();
            if key.is_empty() || key == ALL_LABEL.to_lowercase() {
                return Err(ConfigError::Validation(format!(
                    "gallery.categories contains reserved or empty label {category:?}"
                )));
            }
            if !seen_labels.insert(key) {
                return Err(ConfigError::Validation(format!(
                    "gallery.categories contains {category:?} twice"
                )));
            }
            if slug.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "gallery category {category:?} needs at least one ASCII letter or digit"
                )));
            }
            if !seen_slugs.insert(slug.clone()) {
                return Err(ConfigError::Validation(format!(
                    "gallery category {category:?} has the same tab id {slug:?} as another tab"
                )));
            }
        }
        if self.gallery.placeholder.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery.placeholder must not be empty".into(),
            ));
        }
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.autoplay_interval_ms must be non-zero".into(),
            ));
        }
        if self.marquee.duration_secs == 0 {
            return Err(ConfigError::Validation(
                "marquee.duration_secs must be non-zero".into(),
            ));
        }
        if !(1..=5).contains(&self.marquee.copies) {
            return Err(ConfigError::Validation(
                "marquee.copies must be 1-5".into(),
            ));
        }
        Ok(())
    }
}

/// A social profile link in the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// School identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchoolConfig {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    /// Link to the school on an external maps provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    pub social: Vec<SocialLink>,
    /// Footer copyright line. Defaults to the school name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            name: "Our School".to_string(),
            tagline: "Where curious minds grow".to_string(),
            address: String::new(),
            phones: Vec::new(),
            emails: Vec::new(),
            map_url: None,
            social: Vec::new(),
            copyright: None,
        }
    }
}

/// Hero banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub headline: String,
    pub subheadline: String,
    /// Muted, looping background video (content-relative path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Still image shown until the video plays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    pub cta_label: String,
    /// In-page href of the call to action.
    pub cta_target: String,
    /// Show the campus-visit booking form.
    pub booking_form: bool,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline: "A joyful start to lifelong learning".to_string(),
            subheadline: String::new(),
            video: None,
            poster: None,
            cta_label: "Apply for Admission".to_string(),
            cta_target: SectionId::Admissions.href(),
            booking_form: true,
        }
    }
}

/// Gallery categories and image fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// The closed set of categories photos may use, in tab order.
    pub categories: Vec<String>,
    /// Image shown in place of a missing or broken source.
    pub placeholder: String,
}

pub const DEFAULT_PLACEHOLDER: &str = "https://images.unsplash.com/photo-1594322436404-5a0526db4d13?q=80&w=2629&auto=format&fit=crop";

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            categories: ["Academics", "Sports", "Arts", "Campus", "Events"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Programs carousel behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
    /// Viewport width (px) below which slides stack vertically.
    pub stack_below: u32,
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL.as_millis() as u64,
            stack_below: DEFAULT_STACK_BELOW,
        }
    }
}

/// Testimonial marquee animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarqueeConfig {
    /// Seconds for the track to scroll half its length.
    pub duration_secs: u32,
    /// How many times the testimonial list is repeated in the track.
    pub copies: usize,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            duration_secs: 50,
            copies: 4,
        }
    }
}

/// Anchors shown in the nav bar and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    pub items: Vec<SectionId>,
    pub footer_links: Vec<SectionId>,
    /// Distance (px) kept above a section when scrolling to it.
    pub scroll_offset: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        use SectionId::*;
        Self {
            items: vec![Home, Programs, Gallery, About, Admissions],
            footer_links: vec![Home, Programs, About, Gallery, Videos, Disclosure],
            scroll_offset: DEFAULT_SCROLL_OFFSET as u32,
        }
    }
}

/// Inquiry and booking forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Endpoint forms post to. When unset, forms only acknowledge locally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_action: Option<String>,
    pub acknowledgment: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_action: None,
            acknowledgment: "Thank you! Our admissions office will contact you shortly.".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel asset-probing workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# school-site configuration
# =========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# School identity
# ---------------------------------------------------------------------------
[school]
name = "Our School"
tagline = "Where curious minds grow"
address = ""
phones = []             # e.g. ["+91 99949 59484"]
emails = []             # e.g. ["office@example.edu"]
# map_url = "https://maps.google.com/?q=..."
# copyright = "© 2025 Our School. All rights reserved."

# [[school.social]]
# label = "Instagram"
# url = "https://instagram.com/..."

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# "premium" (dark surfaces) or "playful" (bright surfaces).
preset = "premium"
# Optional overrides of the preset's tokens:
# radius = "1rem"
# shadow = "strong"     # none | soft | medium | strong

# [theme.palette]
# background = "#020617"
# surface = "#0f172a"
# text = "#f8fafc"
# text_muted = "#94a3b8"
# accent = "#9333ea"
# accent_alt = "#ec4899"
# on_accent = "#ffffff"
# border = "#1e293b"

# ---------------------------------------------------------------------------
# Hero banner
# ---------------------------------------------------------------------------
[hero]
headline = "A joyful start to lifelong learning"
subheadline = ""
# video = "assets/hero.mp4"     # muted, looping background video
# poster = "assets/hero.jpg"
cta_label = "Apply for Admission"
cta_target = "#admissions"
booking_form = true

# ---------------------------------------------------------------------------
# Gallery
# ---------------------------------------------------------------------------
[gallery]
# Closed set of categories, in tab order. "All" is added automatically.
categories = ["Academics", "Sports", "Arts", "Campus", "Events"]
# Shown in place of any photo whose source is missing or broken.
placeholder = "https://images.unsplash.com/photo-1594322436404-5a0526db4d13?q=80&w=2629&auto=format&fit=crop"

# ---------------------------------------------------------------------------
# Programs carousel
# ---------------------------------------------------------------------------
[carousel]
# Autoplay interval. Hovering pauses; any manual navigation stops autoplay.
autoplay_interval_ms = 5000
# Below this viewport width (px) the slides are stacked instead.
stack_below = 768

# ---------------------------------------------------------------------------
# Testimonial marquee
# ---------------------------------------------------------------------------
[marquee]
duration_secs = 50
copies = 4

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
[navigation]
# Section anchors: home, programs, whyus, gallery, videos, about, admissions,
# testimonials, contact, privacy, terms, cookies, disclosure
items = ["home", "programs", "gallery", "about", "admissions"]
footer_links = ["home", "programs", "about", "gallery", "videos", "disclosure"]
# Space (px) kept above a section after scrolling to it.
scroll_offset = 80

# ---------------------------------------------------------------------------
# Forms
# ---------------------------------------------------------------------------
[contact]
# form_action = "https://forms.example.com/inquiry"
acknowledgment = "Thank you! Our admissions office will contact you shortly."

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel asset-probing workers.
# Omit to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemePreset;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn default_config_matches_documented_behavior() {
        let config = SiteConfig::default();
        assert_eq!(config.carousel.interval(), Duration::from_millis(5000));
        assert_eq!(config.carousel.stack_below, 768);
        assert_eq!(config.navigation.scroll_offset, 80);
        assert_eq!(config.gallery.categories.len(), 5);
        assert_eq!(config.marquee.copies, 4);
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
[school]
name = "Minervaa Vidhya Mandhir"
"#;
        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.school.name, "Minervaa Vidhya Mandhir");
        assert_eq!(config.school.tagline, SchoolConfig::default().tagline);
        assert_eq!(config.theme.preset, ThemePreset::Premium);
    }

    #[test]
    fn parse_navigation_section_ids() {
        let toml_str = r#"
[navigation]
items = ["home", "videos", "contact"]
"#;
        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.navigation.items,
            vec![SectionId::Home, SectionId::Videos, SectionId::Contact]
        );
    }

    #[test]
    fn unknown_navigation_anchor_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[navigation]\nitems = [\"faq\"]");
        assert!(result.is_err());
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[school]
name = "Sunrise Primary"
phones = ["+91 99949 59484", "+91 98948 86733"]

[[school.social]]
label = "Instagram"
url = "https://instagram.com/sunrise"

[theme]
preset = "playful"

[theme.palette]
accent = "#ec4899"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.school.name, "Sunrise Primary");
        assert_eq!(config.school.phones.len(), 2);
        assert_eq!(config.school.social[0].label, "Instagram");
        assert_eq!(config.theme.preset, ThemePreset::Playful);
        assert_eq!(config.theme.palette.accent.as_deref(), Some("#ec4899"));
        // Unspecified values keep their defaults
        assert_eq!(config.carousel, CarouselConfig::default());
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[carousel]\nautoplay_interval_ms = 0\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[gallery]\ncolumns = 4\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[footer]\ncolumns = 4");
        assert!(result.is_err());
    }

    // =========================================================================
    // merge_toml
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_nested_tables() {
        let base: toml::Value = toml::from_str("[carousel]\nautoplay_interval_ms = 5000\nstack_below = 768").unwrap();
        let overlay: toml::Value = toml::from_str("[carousel]\nstack_below = 640").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["carousel"]["autoplay_interval_ms"].as_integer(), Some(5000));
        assert_eq!(merged["carousel"]["stack_below"].as_integer(), Some(640));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("categories = [\"A\", \"B\"]").unwrap();
        let overlay: toml::Value = toml::from_str("categories = [\"C\"]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["categories"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn categories_override_replaces_defaults() {
        let overlay: toml::Value = toml::from_str("[gallery]\ncategories = [\"Music\", \"Science\"]").unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.gallery.categories, vec!["Music", "Science"]);
        assert_eq!(config.gallery.placeholder, DEFAULT_PLACEHOLDER);
    }

    // =========================================================================
    // validate
    // =========================================================================

    fn with_categories(categories: &[&str]) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.gallery.categories = categories.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn validate_empty_categories() {
        assert!(with_categories(&[]).validate().is_err());
    }

    #[test]
    fn validate_reserved_all_category() {
        assert!(with_categories(&["Sports", "all"]).validate().is_err());
    }

    #[test]
    fn validate_duplicate_category_case_insensitive() {
        assert!(with_categories(&["Sports", "sports"]).validate().is_err());
    }

    #[test]
    fn validate_category_without_ascii_slug() {
        let err = with_categories(&["Sports", "खेल"]).validate().unwrap_err();
        assert!(err.to_string().contains("खेल"));
    }

    #[test]
    fn validate_category_slugging_to_all() {
        assert!(with_categories(&["Sports", "All!"]).validate().is_err());
    }

    #[test]
    fn validate_categories_with_same_slug() {
        let err = with_categories(&["Day Trips", "Day-Trips"]).validate().unwrap_err();
        assert!(err.to_string().contains("day-trips"));
    }

    #[test]
    fn validate_accepts_distinct_slugs() {
        assert!(with_categories(&["Day Trips", "Field Days", "Arts & Crafts"]).validate().is_ok());
    }

    #[test]
    fn validate_empty_school_name() {
        let mut config = SiteConfig::default();
        config.school.name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_marquee_copies_range() {
        let mut config = SiteConfig::default();
        config.marquee.copies = 0;
        assert!(config.validate().is_err());
        config.marquee.copies = 5;
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // processing
    // =========================================================================

    #[test]
    fn effective_threads_auto() {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_threads(&ProcessingConfig::default()), cores);
    }

    #[test]
    fn effective_threads_clamped() {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let config = ProcessingConfig {
            max_processes: Some(99_999),
        };
        assert_eq!(effective_threads(&config), cores);
        let config = ProcessingConfig {
            max_processes: Some(0),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    // =========================================================================
    // stock config
    // =========================================================================

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
