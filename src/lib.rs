//! # School Site
//!
//! A static site generator for primary school marketing websites. A content
//! directory of TOML lists and markdown sections becomes a single landing
//! page (hero, programs carousel, filterable gallery with lightbox, videos,
//! testimonial marquee, admissions and contact) plus one player page per
//! video.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! Content moves through three independent stages, each producing a JSON
//! manifest that the next stage consumes:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json           (files → structured data)
//! 2. Resolve   manifest  →  resolved/manifest.json  (probe images, resolve videos)
//! 3. Generate  manifest  →  dist/                   (final HTML site)
//! ```
//!
//! Each manifest is human-readable JSON you can inspect, and each stage is a
//! function from manifest to manifest, so the interesting logic is testable
//! without a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: reads the content files, validates them, produces the scan manifest |
//! | [`resolve`] | Stage 2: probes local images in parallel, applies placeholders, resolves video URLs |
//! | [`generate`] | Stage 3: renders the final HTML site from the resolved manifest using Maud |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`theme`] | Theme presets and palette overrides rendered as CSS custom properties |
//! | [`gallery`] | Category filtering, lightbox state and broken-image fallback |
//! | [`carousel`] | Programs carousel state machine with autoplay and pause |
//! | [`marquee`] | Testimonial marquee track construction |
//! | [`anchors`] | Section ids, in-page link parsing and smooth-scroll targets |
//! | [`video`] | YouTube URL → video id, embed URL and thumbnail |
//! | [`metadata`] | Title resolution for markdown sections, slug sanitizing |
//! | [`types`] | Shared types serialized between stages |
//! | [`output`] | CLI output formatting for each stage |
//!
//! # Design Decisions
//!
//! ## Behavior Modeled in Rust, Mirrored in the Page
//!
//! The interactive parts of the page (gallery filter, lightbox, carousel,
//! smooth scrolling) are modeled as plain state machines in Rust. The
//! generator uses them to render the initial state, and a small inline
//! script mirrors the same transitions in the browser. Gallery filtering and
//! the lightbox need no script at all: they are radio inputs and `:target`
//! overlays driven by generated CSS.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error, template variables are
//! Rust expressions and all interpolation is escaped.
//!
//! ## Broken Assets Never Fail the Build
//!
//! A missing photo gets the placeholder image; a video URL without a valid
//! id gets a "not found" player. Both are reported, neither stops the build.

pub mod anchors;
pub mod carousel;
pub mod config;
pub mod gallery;
pub mod generate;
pub mod marquee;
pub mod metadata;
pub mod output;
pub mod resolve;
pub mod scan;
pub mod theme;
pub mod types;
pub mod video;

#[cfg(test)]
pub(crate) mod test_helpers;
