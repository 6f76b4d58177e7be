//! Photo gallery filtering and lightbox state.
//!
//! The gallery shows a fixed list of [`MediaItem`]s under a row of category
//! tabs. The active tab is a [`CategoryFilter`]; the visible subset is every
//! item for [`CategoryFilter::All`] and otherwise the items of one category,
//! always in the original order.
//!
//! Clicking a photo opens it in a lightbox. Only one photo is ever open:
//! opening another replaces it. The close button and the backdrop close the
//! lightbox, clicks on the photo itself do not.
//!
//! ## Static rendering
//!
//! The generated page has no runtime filter logic. Instead, [`filter`] runs
//! once per tab at build time and each result becomes its own panel. Tabs
//! are radio inputs and [`filter_css`] shows the panel of the checked tab, so
//! filtering works without JavaScript. Lightboxes are `:target` overlays,
//! and since a document has at most one target, at most one is open.

use crate::metadata::sanitize_slug;
use crate::resolve::AssetStatus;
use crate::types::{MediaItem, ResolvedImage};
use thiserror::Error;

/// Label of the wildcard tab.
pub const ALL_LABEL: &str = "All";

#[derive(Error, Debug, PartialEq)]
pub enum GalleryError {
    #[error("Unknown gallery category: {0}")]
    UnknownCategory(String),
}

/// The selected gallery tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a tab label against the configured categories.
    ///
    /// Matching is case-insensitive and yields the configured spelling.
    pub fn parse(label: &str, categories: &[String]) -> Result<Self, GalleryError> {
        let label = label.trim();
        if label.eq_ignore_ascii_case(ALL_LABEL) {
            return Ok(Self::All);
        }
        categories
            .iter()
            .find(|c| c.eq_ignore_ascii_case(label))
            .map(|c| Self::Only(c.clone()))
            .ok_or_else(|| GalleryError::UnknownCategory(label.to_string()))
    }

    /// The wildcard followed by one filter per category, in tab order.
    pub fn tabs(categories: &[String]) -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(categories.iter().cloned().map(Self::Only))
            .collect()
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(c) => c,
        }
    }

    /// Identifier used in element ids and `data-filter` attributes.
    pub fn slug(&self) -> String {
        sanitize_slug(&self.label().to_lowercase())
    }
}

/// Items visible under `filter`, in original order.
pub fn filter<'a, T: AsRef<MediaItem>>(items: &'a [T], filter: &CategoryFilter) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| filter.matches(&item.as_ref().category))
        .collect()
}

/// Where a click inside an open lightbox landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    CloseButton,
    Backdrop,
    Content,
}

/// Interaction state of one gallery: the active tab and the open photo.
#[derive(Debug)]
pub struct GalleryView<'a, T> {
    items: &'a [T],
    filter: CategoryFilter,
    selected: Option<u32>,
}

impl<'a, T: AsRef<MediaItem>> GalleryView<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            filter: CategoryFilter::All,
            selected: None,
        }
    }

    /// Switch tabs. Selecting the active tab changes nothing.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn visible(&self) -> Vec<&'a T> {
        filter(self.items, &self.filter)
    }

    /// True when the active tab has no photos and the empty state shows.
    pub fn is_empty_state(&self) -> bool {
        !self
            .items
            .iter()
            .any(|item| self.filter.matches(&item.as_ref().category))
    }

    /// Open a visible photo, replacing any open one.
    ///
    /// Returns false (and leaves the selection alone) when `id` is not visible.
    pub fn open(&mut self, id: u32) -> bool {
        let visible = self.visible().iter().any(|item| item.as_ref().id == id);
        if visible {
            self.selected = Some(id);
        }
        visible
    }

    /// Handle a click while the lightbox is open. Returns true if it closed.
    pub fn dismiss(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::CloseButton | ClickTarget::Backdrop => {
                let was_open = self.selected.is_some();
                self.close();
                was_open
            }
            ClickTarget::Content => false,
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'a T> {
        let id = self.selected?;
        self.items.iter().find(|item| item.as_ref().id == id)
    }
}

/// Replace a broken source with the placeholder.
///
/// Remote sources cannot be checked at build time and pass through; the
/// rendered `<img>` swaps them for the placeholder if they fail to load.
pub fn apply_fallback(source_ref: &str, status: &AssetStatus, placeholder: &str) -> ResolvedImage {
    match status {
        AssetStatus::Remote => ResolvedImage {
            src: source_ref.to_string(),
            dimensions: None,
            fallback: false,
        },
        AssetStatus::Found { width, height } => ResolvedImage {
            src: source_ref.to_string(),
            dimensions: Some((*width, *height)),
            fallback: false,
        },
        AssetStatus::Missing | AssetStatus::Unreadable => ResolvedImage {
            src: placeholder.to_string(),
            dimensions: None,
            fallback: true,
        },
    }
}

/// CSS that shows the panel and highlights the tab of the checked filter.
pub fn filter_css(categories: &[String]) -> String {
    let slugs: Vec<String> = CategoryFilter::tabs(categories)
        .iter()
        .map(CategoryFilter::slug)
        .collect();

    let panels = slugs
        .iter()
        .map(|s| format!("#filter-{s}:checked ~ .gallery-panels .gallery-panel[data-filter=\"{s}\"]"))
        .collect::<Vec<_>>()
        .join(",\n");
    let tabs = slugs
        .iter()
        .map(|s| format!("#filter-{s}:checked ~ .gallery-tabs label[for=\"filter-{s}\"]"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#".gallery-panel {{
    display: none;
}}

{panels} {{
    display: block;
}}

{tabs} {{
    background: var(--color-accent);
    color: var(--color-on-accent);
}}"#
    )
}
