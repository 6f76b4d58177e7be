//! HTML site generation.
//!
//! Stage 3 of the build pipeline. Takes the resolved manifest and generates
//! the final static site.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): every section of the school site, in page order
//! - **Video pages** (`/videos/{slug}.html`): a standalone, linkable player per video
//!
//! ## Sections
//!
//! | Section | Rendered when | Behavior |
//! |---------|---------------|----------|
//! | `#home` | always | hero, optional background video, booking form |
//! | `#programs` | programs exist | carousel with autoplay and pause-on-hover |
//! | `#whyus`, `#about`, `#admissions` | markdown file exists | text |
//! | `#gallery` | photos exist | category tabs, one panel per tab, lightboxes |
//! | `#videos` | videos exist | cards opening in-page player overlays |
//! | `#testimonials` | testimonials exist | infinite marquee |
//! | `#contact` | always | address, phones, email, map link, form |
//! | legal sections | markdown file exists | footer text blocks |
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── videos/
//! │   ├── campus-tour.html
//! │   └── annual-day.html
//! └── assets/                 # copied from content/assets/
//!     └── ...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles, reading theme tokens from CSS custom properties
//! - `static/site.js`: Carousel timer, smooth scrolling, form acknowledgment
//!
//! Generated CSS is prepended: theme tokens, gallery filter rules and the
//! breakpoints and durations taken from config.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::anchors::{self, PageLayout, SectionId};
use crate::carousel::{Carousel, CarouselError};
use crate::config::SiteConfig;
use crate::gallery::{self, CategoryFilter};
use crate::marquee;
use crate::metadata;
use crate::resolve::{ResolvedManifest, ResolvedPhoto, ResolvedProgram, ResolvedVideo, is_remote};
use crate::theme;
use crate::types::{ResolvedImage, Testimonial, TextSection};
use crate::video::VideoKind;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Directory under the content root that is copied to the output verbatim.
pub const ASSETS_DIR: &str = "assets";

/// Directory of the per-video player pages.
pub const VIDEOS_DIR: &str = "videos";

pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: ResolvedManifest = serde_json::from_str(&manifest_content)?;

    let css = build_css(&manifest.config);

    fs::create_dir_all(output_dir)?;
    copy_assets(&source_root.join(ASSETS_DIR), &output_dir.join(ASSETS_DIR))?;

    for href in check_links(&manifest) {
        tracing::warn!(href = %href, "link target is not on the page, clicking it will do nothing");
    }

    let index_html = render_index(&manifest, &css)?;
    fs::write(output_dir.join("index.html"), index_html.into_string())?;
    tracing::debug!("generated index.html");

    if !manifest.videos.is_empty() {
        let videos_dir = output_dir.join(VIDEOS_DIR);
        fs::create_dir_all(&videos_dir)?;
        for video in &manifest.videos {
            let page = render_video_page(video, &manifest.config, &css);
            fs::write(
                videos_dir.join(format!("{}.html", video.entry.slug)),
                page.into_string(),
            )?;
        }
        tracing::debug!(count = manifest.videos.len(), "generated video pages");
    }

    Ok(())
}

/// Copy `content/assets/` into the output, preserving structure.
fn copy_assets(src: &Path, dst: &Path) -> Result<(), GenerateError> {
    if !src.is_dir() {
        return Ok(());
    }
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(std::io::Error::other)?;
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

// ============================================================================
// CSS
// ============================================================================

/// Theme tokens, filter rules, config-driven layout rules, then base styles.
pub fn build_css(config: &SiteConfig) -> String {
    let theme_css = theme::generate_theme_css(&theme::tokens(&config.theme));
    let filter_css = gallery::filter_css(&config.gallery.categories);
    format!(
        "{}\n\n{}\n\n{}\n\n{}",
        theme_css,
        filter_css,
        layout_css(config),
        CSS_STATIC
    )
}

fn layout_css(config: &SiteConfig) -> String {
    format!(
        r#"html {{
    scroll-padding-top: {offset}px;
}}

.marquee-track {{
    animation-duration: {duration}s;
}}

@media (max-width: {max_width}px) {{
    .carousel-track {{
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        height: auto;
    }}
    .carousel .slide[data-role] {{
        position: static;
        transform: none;
        opacity: 1;
        visibility: visible;
    }}
    .carousel-controls {{
        display: none;
    }}
}}"#,
        offset = config.navigation.scroll_offset,
        duration = config.marquee.duration_secs,
        max_width = config.carousel.stack_below.saturating_sub(1),
    )
}

// ============================================================================
// Page structure
// ============================================================================

/// Sections of the index page, in page order.
///
/// Data-driven sections are left out when they have no content. Footer-only
/// sections are included when their markdown file exists.
pub fn rendered_sections(manifest: &ResolvedManifest) -> Vec<SectionId> {
    SectionId::ALL
        .into_iter()
        .filter(|id| match id {
            SectionId::Home | SectionId::Contact => true,
            SectionId::Programs => !manifest.programs.is_empty(),
            SectionId::Gallery => !manifest.photos.is_empty(),
            SectionId::Videos => !manifest.videos.is_empty(),
            SectionId::Testimonials => !manifest.testimonials.is_empty(),
            _ => text_section(manifest, *id).is_some(),
        })
        .collect()
}

fn text_section(manifest: &ResolvedManifest, id: SectionId) -> Option<&TextSection> {
    manifest.sections.iter().find(|s| s.id == id)
}

/// Element ids present on the index page.
///
/// Positions are section ordinals. At build time only presence matters; the
/// browser script measures real offsets.
pub fn page_layout(manifest: &ResolvedManifest) -> PageLayout {
    let mut layout = PageLayout::new();
    for (i, id) in rendered_sections(manifest).into_iter().enumerate() {
        layout.insert(id.as_str(), i as f64);
    }
    layout
}

/// In-page hrefs the index page links to from navigation, footer and hero.
fn in_page_links(config: &SiteConfig) -> Vec<String> {
    config
        .navigation
        .items
        .iter()
        .chain(&config.navigation.footer_links)
        .map(|id| id.href())
        .chain(std::iter::once(config.hero.cta_target.clone()))
        .collect()
}

/// Links whose target section was not rendered.
pub fn check_links(manifest: &ResolvedManifest) -> Vec<String> {
    let links = in_page_links(&manifest.config);
    let refs: Vec<&str> = links.iter().map(String::as_str).collect();
    let layout = page_layout(manifest);
    let mut dangling: Vec<String> = anchors::dangling_links(&refs, &layout)
        .into_iter()
        .map(String::from)
        .collect();
    dangling.sort();
    dangling.dedup();
    dangling
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, scroll_offset: u32, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body data-scroll-offset=(scroll_offset) {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// URL of a content-relative asset from a page `depth` directories deep.
fn asset_url(src: &str, depth: usize) -> String {
    if is_remote(src) {
        src.to_string()
    } else {
        format!("{}{}", "../".repeat(depth), src)
    }
}

/// An `<img>` for a resolved image.
///
/// Local images carry their dimensions. Images that have not already fallen
/// back swap to the placeholder if they fail to load in the browser.
fn render_image(
    image: &ResolvedImage,
    alt: &str,
    placeholder: &str,
    depth: usize,
    lazy: bool,
) -> Markup {
    let (width, height) = match image.dimensions {
        Some((w, h)) => (Some(w), Some(h)),
        None => (None, None),
    };
    let onerror = (!image.fallback).then(|| {
        format!(
            "this.onerror=null;this.src='{}'",
            asset_url(placeholder, depth).replace('\'', "%27")
        )
    });
    html! {
        img src=(asset_url(&image.src, depth))
            alt=(alt)
            width=[width]
            height=[height]
            loading=[lazy.then_some("lazy")]
            onerror=[onerror];
    }
}

/// Renders the fixed site header with anchor navigation.
fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            a.brand href=(SectionId::Home.href()) data-smooth { (config.school.name) }
            nav.site-nav {
                input.nav-toggle type="checkbox" id="nav-toggle";
                label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                ul.nav-links {
                    @for id in &config.navigation.items {
                        li { a href=(id.href()) data-smooth { (id.default_title()) } }
                    }
                }
            }
        }
    }
}

fn render_markdown(body: &str) -> Markup {
    let parser = Parser::new(body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

/// Form that posts to the configured endpoint, or acknowledges locally.
fn inquiry_form(class: &str, config: &SiteConfig, submit: &str, fields: Markup) -> Markup {
    html! {
        form class=(class)
            method="post"
            action=[config.contact.form_action.as_deref()]
            data-ack=(config.contact.acknowledgment)
        {
            (fields)
            button.button type="submit" { (submit) }
            p.form-ack role="status" hidden {}
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

fn render_hero(manifest: &ResolvedManifest) -> Markup {
    let config = &manifest.config;
    let hero = &config.hero;
    let subheadline = metadata::resolve(&[Some(hero.subheadline.as_str()), Some(config.school.tagline.as_str())]);
    let poster = manifest
        .hero_poster
        .as_ref()
        .map(|p| asset_url(&p.src, 0));

    let booking_fields = html! {
        h3 { "Book a Campus Visit" }
        label { "Parent's name" input type="text" name="name" required; }
        label { "Phone" input type="tel" name="phone" required; }
        label { "Email" input type="email" name="email"; }
        label { "Grade applying for" input type="text" name="grade"; }
        label { "Preferred date" input type="date" name="date"; }
    };

    html! {
        section.hero id=(SectionId::Home.as_str()) {
            @if let Some(video) = &hero.video {
                video.hero-video autoplay muted loop playsinline poster=[poster.as_deref()] {
                    source src=(asset_url(video, 0));
                }
            } @else if let Some(poster) = &poster {
                img.hero-poster src=(poster) alt="";
            }
            div.hero-overlay {}
            div.hero-content {
                h1 { (hero.headline) }
                @if let Some(sub) = subheadline {
                    p.hero-subheadline { (sub) }
                }
                a.button href=(hero.cta_target) data-smooth { (hero.cta_label) }
            }
            @if hero.booking_form {
                (inquiry_form("booking-form", config, "Request a Visit", booking_fields))
            }
        }
    }
}

/// Programs carousel. Slides start in the roles of a freshly mounted carousel.
fn render_programs(programs: &[ResolvedProgram], config: &SiteConfig) -> Result<Markup, CarouselError> {
    let carousel = Carousel::new(programs.len(), config.carousel.interval())?;
    let roles = carousel.roles();
    let placeholder = &config.gallery.placeholder;

    Ok(html! {
        section.programs id=(SectionId::Programs.as_str()) {
            h2 { (SectionId::Programs.default_title()) }
            div.carousel
                data-interval=(config.carousel.autoplay_interval_ms)
                data-stack-below=(config.carousel.stack_below)
            {
                div.carousel-track {
                    @for ((i, program), role) in programs.iter().enumerate().zip(&roles) {
                        @let p = &program.program;
                        article.slide data-index=(i) data-role=(role.as_str()) {
                            (render_image(&program.image, &p.title, placeholder, 0, false))
                            div.slide-body {
                                span.badge style=[p.accent.as_ref().map(|c| format!("background:{c}"))] {
                                    (p.category)
                                }
                                h3 { (p.title) }
                                p { (p.description) }
                                @if !p.points.is_empty() {
                                    ul.slide-points {
                                        @for point in &p.points {
                                            li { (point) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div.carousel-controls {
                    button.carousel-prev type="button" data-carousel="prev" aria-label="Previous program" { "‹" }
                    div.carousel-dots {
                        @for i in 0..carousel.len() {
                            button.dot
                                type="button"
                                data-carousel-jump=(i)
                                aria-label={ "Show program " (i + 1) }
                                aria-current=(if i == carousel.current_index() { "true" } else { "false" }) {}
                        }
                    }
                    button.carousel-next type="button" data-carousel="next" aria-label="Next program" { "›" }
                }
            }
        }
    })
}

fn render_text_section(section: &TextSection) -> Markup {
    let class = if section.id.is_footer_only() {
        "legal-section"
    } else {
        "text-section"
    };
    html! {
        section class=(class) id=(section.id.as_str()) {
            h2 { (section.title) }
            div.prose { (render_markdown(&section.body)) }
        }
    }
}

/// Gallery: radio tabs, one panel per filter, one lightbox per photo.
fn render_gallery(photos: &[ResolvedPhoto], config: &SiteConfig) -> Markup {
    let tabs = CategoryFilter::tabs(&config.gallery.categories);
    let placeholder = &config.gallery.placeholder;

    html! {
        section.gallery-section id=(SectionId::Gallery.as_str()) {
            h2 { (SectionId::Gallery.default_title()) }
            div.gallery {
                @for (i, tab) in tabs.iter().enumerate() {
                    input.filter-radio type="radio" name="gallery-filter" id={ "filter-" (tab.slug()) } checked[i == 0];
                }
                div.gallery-tabs role="tablist" {
                    @for tab in &tabs {
                        label for={ "filter-" (tab.slug()) } { (tab.label()) }
                    }
                }
                div.gallery-panels {
                    @for tab in &tabs {
                        @let visible = gallery::filter(photos, tab);
                        div.gallery-panel data-filter=(tab.slug()) {
                            @if visible.is_empty() {
                                p.gallery-empty { "No photos found in this category." }
                            } @else {
                                div.gallery-grid {
                                    @for photo in visible {
                                        @let alt = photo_alt(photo);
                                        a.gallery-item.featured[photo.item.featured] href={ "#photo-" (photo.item.id) } {
                                            (render_image(&photo.image, &alt, placeholder, 0, true))
                                            span.gallery-caption { (alt) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            @for photo in photos {
                (render_lightbox(photo, placeholder))
            }
        }
    }
}

fn photo_alt(photo: &ResolvedPhoto) -> String {
    metadata::resolve(&[Some(photo.item.caption.as_str()), Some(photo.item.category.as_str())])
        .unwrap_or_default()
}

/// A `:target` overlay. Backdrop and close button link back to the gallery;
/// the content itself is not a link, so clicks on it keep the lightbox open.
fn render_lightbox(photo: &ResolvedPhoto, placeholder: &str) -> Markup {
    let gallery_href = SectionId::Gallery.href();
    let alt = photo_alt(photo);
    html! {
        div.lightbox id={ "photo-" (photo.item.id) } role="dialog" aria-label=(alt) {
            a.lightbox-backdrop href=(gallery_href) aria-label="Close" {}
            figure.lightbox-content {
                (render_image(&photo.image, &alt, placeholder, 0, true))
                figcaption {
                    span.lightbox-category { (photo.item.category) }
                    @if !photo.item.caption.is_empty() {
                        " " (photo.item.caption)
                    }
                }
            }
            a.lightbox-close href=(gallery_href) aria-label="Close" { "×" }
        }
    }
}

/// Element id of a video's in-page player overlay.
fn video_modal_id(video: &ResolvedVideo) -> String {
    format!("video-{}", video.entry.slug)
}

fn render_videos(videos: &[ResolvedVideo], config: &SiteConfig) -> Markup {
    html! {
        section.videos id=(SectionId::Videos.as_str()) {
            h2 { (SectionId::Videos.default_title()) }
            div.video-grid {
                @for video in videos {
                    a.video-card href={ "#" (video_modal_id(video)) } {
                        div.video-thumb {
                            (render_image(&video.thumbnail, &video.entry.title, &config.gallery.placeholder, 0, true))
                            span.play-icon aria-hidden="true" { "▶" }
                        }
                        h3 { (video.entry.title) }
                        @if !video.playable {
                            span.video-missing { "Video unavailable" }
                        }
                    }
                }
            }
            @for video in videos {
                (render_video_modal(video))
            }
        }
    }
}

/// A `:target` player overlay, closed the same way as a photo lightbox.
///
/// The page script loads the embed when the overlay opens and unloads it
/// when it closes, so nothing plays in the background.
fn render_video_modal(video: &ResolvedVideo) -> Markup {
    let videos_href = SectionId::Videos.href();
    let entry = &video.entry;
    html! {
        div.lightbox.video-modal id=(video_modal_id(video)) role="dialog" aria-label=(entry.title) {
            a.lightbox-backdrop href=(videos_href) aria-label="Close" {}
            div.lightbox-content.video-modal-content {
                div.player { (render_player(video, 0, PlayerMode::Overlay)) }
                p.video-modal-caption {
                    (entry.title)
                    " "
                    a href={ (VIDEOS_DIR) "/" (entry.slug) ".html" } { "Open player page" }
                }
            }
            a.lightbox-close href=(videos_href) aria-label="Close" { "×" }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerMode {
    /// Standalone page: the player starts as soon as the page loads.
    Page,
    /// In-page overlay: the source is attached by script on open.
    Overlay,
}

/// The player itself, or the "not found" state for unresolved videos.
fn render_player(video: &ResolvedVideo, depth: usize, mode: PlayerMode) -> Markup {
    let entry = &video.entry;
    let poster = entry.thumbnail.as_ref().map(|_| asset_url(&video.thumbnail.src, depth));
    let source = asset_url(&entry.source_url, depth);
    html! {
        @if !video.playable {
            div.video-not-found role="alert" { "Video source not found" }
        } @else {
            @match (entry.kind, &video.details.embed_url, mode) {
                (VideoKind::Youtube, Some(embed), PlayerMode::Page) => {
                    iframe src=(embed)
                        title=(entry.title)
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen {}
                }
                (VideoKind::Youtube, Some(embed), PlayerMode::Overlay) => {
                    iframe data-src=(embed)
                        title=(entry.title)
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen {}
                }
                (_, _, PlayerMode::Page) => {
                    video controls autoplay playsinline poster=[poster] {
                        source src=(source);
                    }
                }
                (_, _, PlayerMode::Overlay) => {
                    video controls playsinline preload="none" poster=[poster] {
                        source src=(source);
                    }
                }
            }
        }
    }
}

fn render_testimonials(testimonials: &[Testimonial], config: &SiteConfig) -> Markup {
    let len = testimonials.len();
    let track = marquee::track(testimonials, config.marquee.copies);
    html! {
        section.testimonials id=(SectionId::Testimonials.as_str()) {
            h2 { "What Parents Say" }
            div.marquee {
                div.marquee-track {
                    @for (i, t) in track.into_iter().enumerate() {
                        article class={ "testimonial-card " (marquee::accent_for(i % len)) }
                            aria-hidden=[(i >= len).then_some("true")]
                        {
                            header {
                                @if let Some(avatar) = &t.avatar {
                                    img.avatar src=(asset_url(avatar, 0)) alt=(t.name) loading="lazy";
                                } @else {
                                    span.avatar.avatar-initials { (initials(&t.name)) }
                                }
                                div {
                                    strong { (t.name) }
                                    span.role { (t.role) }
                                }
                            }
                            div.stars aria-label={ (t.rating) " out of " (marquee::MAX_RATING) } {
                                @for filled in marquee::stars(t.rating) {
                                    span.star.filled[filled] { "★" }
                                }
                            }
                            blockquote { (t.content) }
                        }
                    }
                }
            }
        }
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

fn render_contact(config: &SiteConfig) -> Markup {
    let school = &config.school;
    let fields = html! {
        label { "Name" input type="text" name="name" required; }
        label { "Email" input type="email" name="email" required; }
        label { "Message" textarea name="message" rows="4" required {} }
    };
    html! {
        section.contact id=(SectionId::Contact.as_str()) {
            h2 { (SectionId::Contact.default_title()) }
            div.contact-grid {
                div.contact-details {
                    @if !school.address.is_empty() {
                        p.address { (school.address) }
                    }
                    ul.contact-list {
                        @for phone in &school.phones {
                            li { a href=(tel_href(phone)) { (phone) } }
                        }
                        @for email in &school.emails {
                            li { a href={ "mailto:" (email) } { (email) } }
                        }
                        @if let Some(map) = &school.map_url {
                            li { a href=(map) target="_blank" rel="noopener" { "Find us on the map" } }
                        }
                    }
                }
                (inquiry_form("contact-form", config, "Send Message", fields))
            }
        }
    }
}

fn render_footer(manifest: &ResolvedManifest) -> Markup {
    let config = &manifest.config;
    let school = &config.school;
    let legal: Vec<&TextSection> = manifest
        .sections
        .iter()
        .filter(|s| s.id.is_footer_only())
        .collect();
    let copyright = metadata::resolve(&[school.copyright.as_deref()])
        .unwrap_or_else(|| format!("© {}. All rights reserved.", school.name));

    html! {
        footer.site-footer {
            div.footer-columns {
                div.footer-brand {
                    strong { (school.name) }
                    p { (school.tagline) }
                    @if !school.social.is_empty() {
                        ul.social-links {
                            @for link in &school.social {
                                li { a href=(link.url) target="_blank" rel="noopener" { (link.label) } }
                            }
                        }
                    }
                }
                nav.footer-links {
                    h4 { "Quick Links" }
                    ul {
                        @for id in &config.navigation.footer_links {
                            li { a href=(id.href()) data-smooth { (id.default_title()) } }
                        }
                    }
                }
                div.footer-contact {
                    h4 { "Contact" }
                    ul {
                        @for phone in &school.phones {
                            li { a href=(tel_href(phone)) { (phone) } }
                        }
                        @for email in &school.emails {
                            li { a href={ "mailto:" (email) } { (email) } }
                        }
                    }
                }
            }
            @if !legal.is_empty() {
                nav.legal-links {
                    @for section in &legal {
                        a href=(section.id.href()) data-smooth { (section.title) }
                    }
                }
                div.legal-sections {
                    @for section in &legal {
                        (render_text_section(section))
                    }
                }
            }
            p.copyright { (copyright) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the single-page school site.
fn render_index(manifest: &ResolvedManifest, css: &str) -> Result<Markup, CarouselError> {
    let config = &manifest.config;
    let mut sections = Vec::new();
    for id in rendered_sections(manifest) {
        let markup = match id {
            SectionId::Home => render_hero(manifest),
            SectionId::Programs => render_programs(&manifest.programs, config)?,
            SectionId::Gallery => render_gallery(&manifest.photos, config),
            SectionId::Videos => render_videos(&manifest.videos, config),
            SectionId::Testimonials => render_testimonials(&manifest.testimonials, config),
            SectionId::Contact => render_contact(config),
            id if id.is_footer_only() => continue,
            id => match text_section(manifest, id) {
                Some(section) => render_text_section(section),
                None => continue,
            },
        };
        sections.push(markup);
    }

    let content = html! {
        (site_header(config))
        main {
            @for section in &sections {
                (section)
            }
        }
        (render_footer(manifest))
    };

    Ok(base_document(
        &config.school.name,
        css,
        config.navigation.scroll_offset,
        content,
    ))
}

/// Renders a video player page.
///
/// Videos that did not resolve show a "not found" state instead of a player.
fn render_video_page(video: &ResolvedVideo, config: &SiteConfig, css: &str) -> Markup {
    let entry = &video.entry;
    let back = format!("../index.html{}", SectionId::Videos.href());

    let content = html! {
        header.site-header {
            a.brand href="../index.html" { (config.school.name) }
            a.back-link href=(back) { "‹ All videos" }
        }
        main.player-page {
            h1 { (entry.title) }
            div.player { (render_player(video, 1, PlayerMode::Page)) }
        }
    };

    base_document(
        &format!("{} - {}", entry.title, config.school.name),
        css,
        config.navigation.scroll_offset,
        content,
    )
}

// ============================================================================
// Tests
// ============================================================================
