//! In-page section anchors and smooth-scroll navigation.
//!
//! The page is one long document of sections, each with a fixed `id`. The
//! navigation bar, the footer and the hero buttons link to them with `#id`
//! hrefs, and the page script scrolls there smoothly, stopping a fixed
//! offset above the section so the fixed header does not cover its title.
//!
//! A link whose target is not on the page does nothing: no scroll, no error,
//! no navigation. The generator warns about such links at build time via
//! [`dangling_links`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Offset (px) kept between the viewport top and the scroll target.
pub const DEFAULT_SCROLL_OFFSET: f64 = 80.0;

/// Identifier of a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Programs,
    Whyus,
    Gallery,
    Videos,
    About,
    Admissions,
    Testimonials,
    Contact,
    Privacy,
    Terms,
    Cookies,
    Disclosure,
}

impl SectionId {
    /// Every section, in page order.
    pub const ALL: [SectionId; 13] = [
        Self::Home,
        Self::Programs,
        Self::Whyus,
        Self::Gallery,
        Self::Videos,
        Self::About,
        Self::Admissions,
        Self::Testimonials,
        Self::Contact,
        Self::Privacy,
        Self::Terms,
        Self::Cookies,
        Self::Disclosure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Programs => "programs",
            Self::Whyus => "whyus",
            Self::Gallery => "gallery",
            Self::Videos => "videos",
            Self::About => "about",
            Self::Admissions => "admissions",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
            Self::Privacy => "privacy",
            Self::Terms => "terms",
            Self::Cookies => "cookies",
            Self::Disclosure => "disclosure",
        }
    }

    /// Sections reachable only from footer links.
    pub fn is_footer_only(self) -> bool {
        matches!(
            self,
            Self::Privacy | Self::Terms | Self::Cookies | Self::Disclosure
        )
    }

    /// Sections whose content comes from a markdown file.
    pub fn is_text_section(self) -> bool {
        self.is_footer_only() || matches!(self, Self::Whyus | Self::About | Self::Admissions)
    }

    /// Title used when the markdown file has no `# heading`, and in nav links.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Programs => "Programs",
            Self::Whyus => "Why Us",
            Self::Gallery => "Gallery",
            Self::Videos => "Videos",
            Self::About => "About Us",
            Self::Admissions => "Admissions",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Use",
            Self::Cookies => "Cookie Policy",
            Self::Disclosure => "Mandatory Disclosure",
        }
    }

    /// `#id` href for links.
    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Target id of an in-page href.
///
/// Accepts `#id`, `/#id` and a bare `id`. Returns `None` for hrefs that point
/// elsewhere (`/about.html`, `https://…`, `mailto:…`) and for an empty target.
pub fn parse_href(href: &str) -> Option<&str> {
    let target = match href.split_once('#') {
        Some((before, after)) if before.is_empty() || before == "/" => after,
        Some(_) => return None,
        None if href.contains(['/', ':', '.']) => return None,
        None => href,
    };
    (!target.is_empty()).then_some(target)
}

/// Element positions of a rendered document.
pub trait DocumentLayout {
    /// Distance (px) from the document top to the element with `id`.
    fn offset_top(&self, id: &str) -> Option<f64>;
}

/// Rendered sections and their document positions.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    positions: BTreeMap<String, f64>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, offset_top: f64) {
        self.positions.insert(id.into(), offset_top);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl DocumentLayout for PageLayout {
    fn offset_top(&self, id: &str) -> Option<f64> {
        self.positions.get(id).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Where to scroll for `href`, or `None` when it has no target on the page.
///
/// The result depends only on the document, never on the current scroll
/// position, so repeating the same navigation lands in the same place.
pub fn scroll_target(layout: &impl DocumentLayout, href: &str, offset: f64) -> Option<ScrollRequest> {
    let id = parse_href(href)?;
    let top = layout.offset_top(id)?;
    Some(ScrollRequest {
        top: (top - offset).max(0.0),
        behavior: ScrollBehavior::Smooth,
    })
}

/// In-page hrefs from `links` that `layout` cannot resolve.
pub fn dangling_links<'a>(links: &[&'a str], layout: &impl DocumentLayout) -> Vec<&'a str> {
    links
        .iter()
        .copied()
        .filter(|href| parse_href(href).is_some_and(|id| layout.offset_top(id).is_none()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        let mut layout = PageLayout::new();
        layout.insert("home", 0.0);
        layout.insert("programs", 900.0);
        layout.insert("gallery", 2400.0);
        layout
    }

    #[test]
    fn section_ids_round_trip_through_strings() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_section_id() {
        assert_eq!(
            "faq".parse::<SectionId>(),
            Err(UnknownSection("faq".to_string()))
        );
    }

    #[test]
    fn unknown_section_is_an_error_with_message() {
        let err: Box<dyn std::error::Error> = Box::new(UnknownSection("faq".to_string()));
        assert_eq!(err.to_string(), "unknown section id: faq");
    }

    #[test]
    fn footer_only_sections() {
        let footer: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|id| id.is_footer_only())
            .map(SectionId::as_str)
            .collect();
        assert_eq!(footer, vec!["privacy", "terms", "cookies", "disclosure"]);
    }

    #[test]
    fn section_id_serializes_lowercase() {
        let json = serde_json::to_string(&SectionId::Whyus).unwrap();
        assert_eq!(json, r#""whyus""#);
    }

    #[test]
    fn parse_href_forms() {
        assert_eq!(parse_href("#gallery"), Some("gallery"));
        assert_eq!(parse_href("/#gallery"), Some("gallery"));
        assert_eq!(parse_href("gallery"), Some("gallery"));
        assert_eq!(parse_href("#"), None);
        assert_eq!(parse_href("/about.html"), None);
        assert_eq!(parse_href("https://example.com/#gallery"), None);
        assert_eq!(parse_href("mailto:office@example.com"), None);
    }

    #[test]
    fn scroll_applies_header_offset() {
        let request = scroll_target(&layout(), "#programs", DEFAULT_SCROLL_OFFSET).unwrap();
        assert_eq!(request.top, 820.0);
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn scroll_never_goes_above_document_top() {
        let request = scroll_target(&layout(), "#home", DEFAULT_SCROLL_OFFSET).unwrap();
        assert_eq!(request.top, 0.0);
    }

    #[test]
    fn missing_target_is_noop() {
        assert_eq!(scroll_target(&layout(), "#doesnotexist", DEFAULT_SCROLL_OFFSET), None);
    }

    #[test]
    fn repeated_navigation_converges() {
        let page = layout();
        let first = scroll_target(&page, "/#gallery", DEFAULT_SCROLL_OFFSET);
        let second = scroll_target(&page, "/#gallery", DEFAULT_SCROLL_OFFSET);
        assert_eq!(first, second);
    }

    #[test]
    fn dangling_links_skip_external_hrefs() {
        let links = ["#home", "#privacy", "https://maps.google.com", "/#gallery", "#videos"];
        assert_eq!(dangling_links(&links, &layout()), vec!["#privacy", "#videos"]);
    }
}
