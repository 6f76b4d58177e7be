//! Text field resolution for content entries.
//!
//! Several displayed strings can come from more than one place. Each is
//! resolved independently, and the first non-empty value wins:
//!
//! - **Section title**: first `# heading` of the markdown file → the section's default title
//! - **Photo alt text**: caption → category
//! - **Copyright line**: `[school] copyright` → `© {name}`
//!
//! ## Slugs
//!
//! Video titles and gallery categories end up in file names and element ids,
//! so they are sanitized for safe use: non-URL-safe characters replaced with
//! dashes, consecutive dashes collapsed, truncated to a reasonable length.

/// Resolve a text field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value.
///
/// ```text
/// title: resolve(&[heading,  default_title])
/// alt:   resolve(&[caption,  category])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Split a markdown document into its first `# heading` and the rest.
///
/// Only a level-one heading counts. The body keeps every other line
/// unchanged, so nested headings and lists render as written.
pub fn split_title(markdown: &str) -> (Option<&str>, String) {
    let mut title = None;
    let mut body = Vec::new();
    for line in markdown.lines() {
        match line.strip_prefix("# ") {
            Some(heading) if title.is_none() => title = Some(heading.trim()),
            _ => body.push(line),
        }
    }
    (title, body.join("\n").trim().to_string())
}

const MAX_SLUG_LEN: usize = 80;

/// Sanitize a title string for use in URLs, file names and element ids.
///
/// - Replaces non-alphanumeric characters (except dashes) with dashes
/// - Collapses consecutive dashes into one
/// - Strips leading and trailing dashes
/// - Truncates to `MAX_SLUG_LEN` characters (breaks at last dash before limit)
pub fn sanitize_slug(title: &str) -> String {
    let mut collapsed = String::with_capacity(title.len());
    for c in title.chars() {
        let c = if c.is_ascii_alphanumeric() { c } else { '-' };
        if c != '-' || !collapsed.ends_with('-') {
            collapsed.push(c);
        }
    }

    let trimmed = collapsed.trim_matches('-');
    if trimmed.len() <= MAX_SLUG_LEN {
        return trimmed.to_string();
    }
    let truncated = &trimmed[..MAX_SLUG_LEN];
    match truncated.rfind('-') {
        Some(pos) => truncated[..pos].to_string(),
        None => truncated.to_string(),
    }
}
